use chrono::{DateTime, Utc};
use serde::Serialize;
use snapshare_schema::RecordId;
use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Event,
    Media,
    Theme,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Event => "Event",
            RecordKind::Media => "Media",
            RecordKind::Theme => "Theme",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat record that an entity store can own.
///
/// The store assigns `id` and the creation timestamp; everything else comes
/// from the create payload. Patches are shallow: fields absent from the patch
/// are left untouched.
pub trait StoreRecord: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    type Create: fmt::Debug + Send + 'static;
    type Patch: fmt::Debug + Send + 'static;

    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    fn from_create(id: RecordId, create: Self::Create, now: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Ordering used by `get_all`. The sort is stable, so the default keeps
    /// insertion order.
    fn default_order(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }
}
