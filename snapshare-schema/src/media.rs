use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RecordId;
use crate::serde_helpers::nullable_patch;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
        }
    }

    /// Classifies a MIME type: `image/*` is a photo, `video/*` is a video.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if mime_type.starts_with("image/") {
            Some(MediaType::Photo)
        } else if mime_type.starts_with("video/") {
            Some(MediaType::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photo or video shared into an event gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(rename = "Id")]
    pub id: RecordId,
    /// Owning event id. Not checked against the event store.
    pub event_id: RecordId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub uploader_id: String,
    pub uploader_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub file_name: String,
    pub file_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaCreate {
    pub event_id: RecordId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub uploader_id: String,
    pub uploader_name: String,
    pub file_name: String,
    pub file_size: u64,
}

/// Shallow patch for a media record.
///
/// `None` => do not change; `Some(v)` => overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<RecordId>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// `Some(None)` removes the caption.
    #[serde(
        default,
        deserialize_with = "nullable_patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub caption: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl Media {
    pub fn from_create(id: RecordId, create: MediaCreate, uploaded_at: DateTime<Utc>) -> Self {
        let MediaCreate {
            event_id,
            media_type,
            url,
            thumbnail_url,
            caption,
            uploader_id,
            uploader_name,
            file_name,
            file_size,
        } = create;

        Self {
            id,
            event_id,
            media_type,
            url,
            thumbnail_url,
            caption,
            uploader_id,
            uploader_name,
            uploaded_at,
            file_name,
            file_size,
        }
    }

    pub fn apply_patch(&mut self, patch: MediaPatch) {
        let MediaPatch {
            event_id,
            media_type,
            url,
            thumbnail_url,
            caption,
            uploader_id,
            uploader_name,
            file_name,
            file_size,
        } = patch;

        if let Some(v) = event_id {
            self.event_id = v;
        }
        if let Some(v) = media_type {
            self.media_type = v;
        }
        if let Some(v) = url {
            self.url = v;
        }
        if let Some(v) = thumbnail_url {
            self.thumbnail_url = v;
        }
        if let Some(v) = caption {
            self.caption = v;
        }
        if let Some(v) = uploader_id {
            self.uploader_id = v;
        }
        if let Some(v) = uploader_name {
            self.uploader_name = v;
        }
        if let Some(v) = file_name {
            self.file_name = v;
        }
        if let Some(v) = file_size {
            self.file_size = v;
        }
    }

    /// Display source for grids: the thumbnail when present, else the full url.
    pub fn preview_url(&self) -> &str {
        if self.thumbnail_url.is_empty() {
            &self.url
        } else {
            &self.thumbnail_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_type_from_mime() {
        assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Photo));
        assert_eq!(MediaType::from_mime("Video/MP4"), Some(MediaType::Video));
        assert_eq!(MediaType::from_mime("application/pdf"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn type_field_round_trips_as_lowercase() {
        let media: Media = serde_json::from_value(json!({
            "Id": 1,
            "eventId": 2,
            "type": "video",
            "url": "https://cdn.example/v.mp4",
            "uploaderId": "guest-1",
            "uploaderName": "Guest User",
            "uploadedAt": "2025-06-01T18:30:00Z",
            "fileName": "v.mp4",
            "fileSize": 1024
        }))
        .unwrap();

        assert_eq!(media.media_type, MediaType::Video);
        assert!(media.caption.is_none());
        assert_eq!(media.preview_url(), "https://cdn.example/v.mp4");
        assert_eq!(serde_json::to_value(&media).unwrap()["type"], json!("video"));
    }

    #[test]
    fn caption_patch_can_clear() {
        let mut media: Media = serde_json::from_value(json!({
            "Id": 1,
            "eventId": 2,
            "type": "photo",
            "url": "u",
            "thumbnailUrl": "t",
            "caption": "first dance",
            "uploaderId": "guest-1",
            "uploaderName": "Mia",
            "uploadedAt": "2025-06-01T18:30:00Z",
            "fileName": "a.jpg",
            "fileSize": 10
        }))
        .unwrap();

        let patch: MediaPatch = serde_json::from_value(json!({ "caption": null })).unwrap();
        media.apply_patch(patch);
        assert!(media.caption.is_none());
        assert_eq!(media.uploader_name, "Mia");
        assert_eq!(media.preview_url(), "t");
    }
}
