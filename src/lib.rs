pub mod bootstrap;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod store;
pub mod stores;
pub mod utils;

pub use bootstrap::Stores;
pub use error::SnapshareError;
pub use snapshare_schema as schema;
pub use store::{Latency, StoreHandle};
