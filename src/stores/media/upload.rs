use serde::{Deserialize, Serialize};
use snapshare_schema::{Media, MediaCreate, MediaType, RecordId};
use uuid::Uuid;

use crate::error::{SnapshareError, ValidationErrors};

/// A file a guest picked for upload. `url` is whatever display locator the
/// caller produced for it; the store keeps it opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Uploader {
    pub id: String,
    pub name: String,
}

impl Uploader {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Anonymous guest with a fresh `guest-<uuid>` id.
    pub fn guest() -> Self {
        Self::new(format!("guest-{}", Uuid::new_v4()), "Guest User")
    }
}

impl Upload {
    pub fn media_type(&self) -> Option<MediaType> {
        MediaType::from_mime(&self.mime_type)
    }

    pub fn into_create(
        self,
        event_id: RecordId,
        caption: Option<&str>,
        uploader: &Uploader,
    ) -> Result<MediaCreate, SnapshareError> {
        let Some(media_type) = self.media_type() else {
            return Err(SnapshareError::UnsupportedMedia {
                file_name: self.file_name,
                mime_type: self.mime_type,
            });
        };

        let caption = caption
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(MediaCreate {
            event_id,
            media_type,
            thumbnail_url: self.url.clone(),
            url: self.url,
            caption,
            uploader_id: uploader.id.clone(),
            uploader_name: uploader.name.clone(),
            file_name: self.file_name,
            file_size: self.size,
        })
    }
}

/// A batch split into storable payloads and the names of skipped files.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBatch {
    pub creates: Vec<MediaCreate>,
    pub skipped: Vec<String>,
}

/// What `upload_batch` stored, and which files it left out.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub created: Vec<Media>,
    pub skipped: Vec<String>,
}

fn files_error(message: &str) -> SnapshareError {
    let mut errors = ValidationErrors::new();
    errors.push("files", message);
    errors.into()
}

/// Converts a batch, skipping files that are neither images nor videos. One
/// caption applies to every file in the batch.
///
/// Fails with `ValidationFailed` when the batch is empty or nothing in it can
/// be stored.
pub fn prepare_batch(
    event_id: RecordId,
    uploads: Vec<Upload>,
    caption: Option<&str>,
    uploader: &Uploader,
) -> Result<PreparedBatch, SnapshareError> {
    if uploads.is_empty() {
        return Err(files_error("Please select files to upload"));
    }

    let mut creates = Vec::with_capacity(uploads.len());
    let mut skipped = Vec::new();
    for upload in uploads {
        match upload.into_create(event_id, caption, uploader) {
            Ok(create) => creates.push(create),
            Err(SnapshareError::UnsupportedMedia { file_name, .. }) => skipped.push(file_name),
            Err(e) => return Err(e),
        }
    }

    if creates.is_empty() {
        return Err(files_error("Only images and videos are allowed"));
    }
    Ok(PreparedBatch { creates, skipped })
}
