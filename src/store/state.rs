use ahash::AHashSet;
use chrono::{DateTime, Utc};
use snapshare_schema::RecordId;

use super::StoreRecord;
use crate::error::SnapshareError;

/// The records owned by one store, plus its id counter.
///
/// `next_id` starts at `max(seed ids) + 1` (or 1 for an empty seed) and only
/// moves forward, so an id is never handed out twice even after the record
/// holding the current maximum is deleted. `None` once `RecordId::MAX` has
/// been handed out.
#[derive(Debug)]
pub struct StoreState<R> {
    records: Vec<R>,
    next_id: Option<RecordId>,
}

impl<R: StoreRecord> StoreState<R> {
    /// Builds the initial state from seed records, rejecting duplicate ids.
    pub fn from_seed(seed: Vec<R>) -> Result<Self, SnapshareError> {
        let mut seen = AHashSet::with_capacity(seed.len());
        for record in &seed {
            if !seen.insert(record.id()) {
                return Err(SnapshareError::Fixture(format!(
                    "duplicate {} id {} in seed data",
                    R::KIND,
                    record.id()
                )));
            }
        }

        let max_id = seed.iter().map(StoreRecord::id).max().unwrap_or(0);
        let Some(next_id) = max_id.checked_add(1) else {
            return Err(SnapshareError::Fixture(format!(
                "{} seed id {max_id} leaves no room for new records",
                R::KIND
            )));
        };
        Ok(Self {
            records: seed,
            next_id: Some(next_id),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all(&self) -> Vec<R> {
        let mut out = self.records.clone();
        out.sort_by(R::default_order);
        out
    }

    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        let mut out: Vec<R> = self.records.iter().filter(|r| predicate(r)).cloned().collect();
        out.sort_by(R::default_order);
        out
    }

    pub fn get(&self, id: RecordId) -> Result<R, SnapshareError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(SnapshareError::NotFound { kind: R::KIND, id })
    }

    pub fn create(&mut self, create: R::Create, now: DateTime<Utc>) -> Result<R, SnapshareError> {
        let id = self
            .next_id
            .ok_or(SnapshareError::IdsExhausted { kind: R::KIND })?;
        self.next_id = id.checked_add(1);

        let record = R::from_create(id, create, now);
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> Result<R, SnapshareError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(SnapshareError::NotFound { kind: R::KIND, id })?;

        record.apply_patch(patch);
        Ok(record.clone())
    }

    pub fn delete(&mut self, id: RecordId) -> Result<R, SnapshareError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(SnapshareError::NotFound { kind: R::KIND, id })?;

        Ok(self.records.remove(index))
    }
}
