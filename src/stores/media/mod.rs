mod gallery;
mod upload;

pub use gallery::{GallerySort, GalleryStats, RECENT_LIMIT, recent, sort_gallery};
pub use upload::{BatchOutcome, PreparedBatch, Upload, Uploader, prepare_batch};

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use snapshare_schema::{Media, MediaCreate, MediaPatch, RecordId};
use std::cmp::Ordering;
use tracing::{info, warn};

use crate::error::SnapshareError;
use crate::store::{Latency, RecordKind, StoreHandle, StoreRecord};

pub type MediaStore = StoreHandle<Media>;

/// Built-in delay for the media store.
pub const DEFAULT_LATENCY: Latency = Latency::from_millis(400);

impl StoreRecord for Media {
    type Create = MediaCreate;
    type Patch = MediaPatch;

    const KIND: RecordKind = RecordKind::Media;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, create: MediaCreate, now: DateTime<Utc>) -> Self {
        Media::from_create(id, create, now)
    }

    fn apply_patch(&mut self, patch: MediaPatch) {
        Media::apply_patch(self, patch);
    }

    /// Newest upload first.
    fn default_order(a: &Self, b: &Self) -> Ordering {
        b.uploaded_at.cmp(&a.uploaded_at)
    }
}

impl StoreHandle<Media> {
    /// Media shared into `event_id`, newest first. Empty when nothing matches;
    /// the event itself is never looked up.
    pub async fn get_by_event_id(&self, event_id: RecordId) -> Result<Vec<Media>, SnapshareError> {
        self.find(move |m| m.event_id == event_id).await
    }

    /// An event's gallery in the requested order.
    pub async fn gallery(
        &self,
        event_id: RecordId,
        sort: GallerySort,
    ) -> Result<Vec<Media>, SnapshareError> {
        let mut media = self.get_by_event_id(event_id).await?;
        sort_gallery(&mut media, sort);
        Ok(media)
    }

    pub async fn stats_for_event(&self, event_id: RecordId) -> Result<GalleryStats, SnapshareError> {
        let media = self.get_by_event_id(event_id).await?;
        Ok(GalleryStats::from_media(&media))
    }

    /// Turns a batch of guest uploads into media records.
    ///
    /// Files that are neither images nor videos are skipped and reported in
    /// the outcome. Nothing is stored if the batch is empty or every file is
    /// skipped. Creates run concurrently; the store serializes them, so ids
    /// stay distinct.
    pub async fn upload_batch(
        &self,
        event_id: RecordId,
        uploads: Vec<Upload>,
        caption: Option<&str>,
        uploader: &Uploader,
    ) -> Result<BatchOutcome, SnapshareError> {
        let PreparedBatch { creates, skipped } =
            prepare_batch(event_id, uploads, caption, uploader)?;
        if !skipped.is_empty() {
            warn!(event_id, ?skipped, "some files were skipped; only images and videos are allowed");
        }

        let created = try_join_all(creates.into_iter().map(|c| self.create(c))).await?;
        info!(event_id, count = created.len(), uploader = %uploader.name, "upload batch stored");
        Ok(BatchOutcome { created, skipped })
    }
}
