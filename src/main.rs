use mimalloc::MiMalloc;
use snapshare::config::Config;
use snapshare::stores::GallerySort;
use snapshare::stores::events::is_protected;
use snapshare::{Stores, utils::logging};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_optional_toml()?;
    logging::init(&cfg.basic.loglevel);

    info!(
        loglevel = %cfg.basic.loglevel,
        share_origin = %cfg.basic.share_origin,
        "snapshare starting"
    );

    let stores = Stores::spawn(&cfg).await?;

    let themes = stores.themes.get_all().await?;
    info!(count = themes.len(), "themes available");

    for event in stores.events.get_all().await? {
        let stats = stores.media.stats_for_event(event.id).await?;
        let gallery = stores.media.gallery(event.id, GallerySort::Newest).await?;
        let cover = gallery.first().map_or("<none>", |m| m.preview_url());
        let theme = themes
            .iter()
            .find(|t| t.id == event.theme)
            .map_or("<unknown>", |t| t.name.as_str());
        info!(
            id = event.id,
            name = %event.name,
            date = %event.date,
            theme,
            private = is_protected(&event),
            photos = stats.photos,
            videos = stats.videos,
            contributors = stats.contributors,
            cover,
            "event"
        );
    }

    stores.stop().await?;
    info!("snapshare stopped");
    Ok(())
}
