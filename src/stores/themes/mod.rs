use chrono::{DateTime, Utc};
use snapshare_schema::{RecordId, Theme, ThemeCreate, ThemePatch};

use crate::error::SnapshareError;
use crate::store::{Latency, RecordKind, StoreHandle, StoreRecord};

pub type ThemeStore = StoreHandle<Theme>;

/// Built-in delay for the theme store.
pub const DEFAULT_LATENCY: Latency = Latency::from_millis(200);

// Themes keep insertion order, so `default_order` is not overridden.
impl StoreRecord for Theme {
    type Create = ThemeCreate;
    type Patch = ThemePatch;

    const KIND: RecordKind = RecordKind::Theme;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, create: ThemeCreate, _now: DateTime<Utc>) -> Self {
        Theme::from_create(id, create)
    }

    fn apply_patch(&mut self, patch: ThemePatch) {
        Theme::apply_patch(self, patch);
    }
}

impl StoreHandle<Theme> {
    /// The theme preselected on a new event form: the first one listed.
    pub async fn default_theme(&self) -> Result<Option<Theme>, SnapshareError> {
        Ok(self.get_all().await?.into_iter().next())
    }
}
