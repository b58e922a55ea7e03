mod access;
mod form;
mod search;

pub use access::{check_password, is_protected};
pub use form::EventForm;
pub use search::{matches_query, search_events};

use chrono::{DateTime, Local, Utc};
use snapshare_schema::{Event, EventCreate, EventPatch, RecordId};
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::error::SnapshareError;
use crate::store::{Latency, RecordKind, StoreHandle, StoreRecord};

pub type EventStore = StoreHandle<Event>;

/// Built-in delay for the event store.
pub const DEFAULT_LATENCY: Latency = Latency::from_millis(300);

impl StoreRecord for Event {
    type Create = EventCreate;
    type Patch = EventPatch;

    const KIND: RecordKind = RecordKind::Event;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, create: EventCreate, now: DateTime<Utc>) -> Self {
        Event::from_create(id, create, now)
    }

    fn apply_patch(&mut self, patch: EventPatch) {
        Event::apply_patch(self, patch);
    }

    /// Newest first.
    fn default_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl StoreHandle<Event> {
    /// Events whose name, location or description contain `query`
    /// (case-insensitive), newest first. A blank query returns every event.
    pub async fn search(&self, query: &str) -> Result<Vec<Event>, SnapshareError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.get_all().await;
        }
        self.find(move |event| matches_query(event, &query)).await
    }

    /// Validates a host form, fills in share tokens, and creates the event.
    ///
    /// Unlike `create`, this rejects incomplete forms with `ValidationFailed`.
    /// "Today" is the host's local calendar date.
    pub async fn create_checked(
        &self,
        form: EventForm,
        origin: &str,
    ) -> Result<Event, SnapshareError> {
        form.validate(Local::now().date_naive())?;
        let create = form.into_create(origin, Utc::now());
        self.create(create).await
    }

    /// Fetches an event for a guest, enforcing its password if it has one.
    pub async fn unlock(&self, id: RecordId, candidate: &str) -> Result<Event, SnapshareError> {
        let event = self.get_by_id(id).await?;
        if !check_password(&event, candidate) {
            debug!(id, "event password rejected");
            return Err(SnapshareError::AccessDenied { id });
        }
        info!(id, protected = is_protected(&event), "event unlocked");
        Ok(event)
    }
}
