//! Generic in-memory entity store.
//!
//! Layout:
//! - `record.rs`: the `StoreRecord` contract each entity kind implements
//! - `state.rs`: the owned record collection and id counter
//! - `latency.rs`: injectable artificial delay
//! - `actor.rs`: single-writer actor and its cloneable handle

mod actor;
mod latency;
mod record;
mod state;

pub use actor::{StoreHandle, StorePredicate, spawn};
pub use latency::Latency;
pub use record::{RecordKind, StoreRecord};
pub use state::StoreState;
