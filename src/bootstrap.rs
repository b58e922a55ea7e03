use crate::config::Config;
use crate::error::SnapshareError;
use crate::fixtures;
use crate::store::{self, StoreHandle};
use crate::stores::{EventStore, MediaStore, ThemeStore};
use snapshare_schema::{Event, Media, Theme};
use tracing::info;

/// Aggregates handles for the three entity stores.
///
/// Built once at startup and passed to whatever needs data access; the stores
/// never reference each other.
#[derive(Clone)]
pub struct Stores {
    pub events: EventStore,
    pub media: MediaStore,
    pub themes: ThemeStore,
}

impl Stores {
    /// Loads each store's seed (file or built-in) and spawns it with its
    /// resolved latency.
    pub async fn spawn(cfg: &Config) -> Result<Self, SnapshareError> {
        let events_cfg = cfg.events();
        let media_cfg = cfg.media();
        let themes_cfg = cfg.themes();

        info!(
            events_latency = ?events_cfg.latency.duration(),
            events_seed = %events_cfg.seed_file.as_ref().map_or("<builtin>".into(), |p| p.display().to_string()),
            media_latency = ?media_cfg.latency.duration(),
            media_seed = %media_cfg.seed_file.as_ref().map_or("<builtin>".into(), |p| p.display().to_string()),
            themes_latency = ?themes_cfg.latency.duration(),
            themes_seed = %themes_cfg.seed_file.as_ref().map_or("<builtin>".into(), |p| p.display().to_string()),
            "Store config (effective)"
        );

        let events: StoreHandle<Event> = store::spawn(
            fixtures::load(events_cfg.seed_file.as_deref())?,
            events_cfg.latency,
        )
        .await?;
        let media: StoreHandle<Media> = store::spawn(
            fixtures::load(media_cfg.seed_file.as_deref())?,
            media_cfg.latency,
        )
        .await?;
        let themes: StoreHandle<Theme> = store::spawn(
            fixtures::load(themes_cfg.seed_file.as_deref())?,
            themes_cfg.latency,
        )
        .await?;

        info!(
            events_latency = ?events.latency().duration(),
            media_latency = ?media.latency().duration(),
            themes_latency = ?themes.latency().duration(),
            "stores ready"
        );

        Ok(Self {
            events,
            media,
            themes,
        })
    }

    /// Stops all three stores, waiting for each actor to exit.
    pub async fn stop(&self) -> Result<(), SnapshareError> {
        self.events.stop().await?;
        self.media.stop().await?;
        self.themes.stop().await
    }
}
