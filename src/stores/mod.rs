//! The three entity stores and the gallery logic that sits on top of them.

pub mod events;
pub mod media;
pub mod themes;

pub use events::{EventForm, EventStore};
pub use media::{BatchOutcome, GallerySort, GalleryStats, MediaStore, Upload, Uploader};
pub use themes::ThemeStore;
