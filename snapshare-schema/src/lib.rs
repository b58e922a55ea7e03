pub mod event;
pub mod media;
pub mod theme;

mod serde_helpers;

pub use event::{Event, EventCreate, EventPatch};
pub use media::{Media, MediaCreate, MediaPatch, MediaType};
pub use theme::{Theme, ThemeCreate, ThemePatch};

/// Store-assigned record identifier (serialized as `Id`).
pub type RecordId = u64;
