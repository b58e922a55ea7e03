use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::serde_helpers::nullable_patch;

/// A hosted event (wedding, party, ...) that owns a shared gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub date: NaiveDate,
    /// Theme record id. Not checked against the theme store.
    pub theme: RecordId,
    /// Plaintext access password; `Some` marks the event as private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub qr_code: String,
    #[serde(default)]
    pub share_link: String,
    #[serde(default)]
    pub host_id: String,
    pub created_at: DateTime<Utc>,
    /// Informational counter; never recomputed from the media store.
    #[serde(default)]
    pub media_count: u64,
}

/// Payload for creating an event. `Id`, `createdAt` and `mediaCount` are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    pub name: String,
    pub location: String,
    pub description: String,
    pub date: NaiveDate,
    pub theme: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub qr_code: String,
    #[serde(default)]
    pub share_link: String,
    #[serde(default)]
    pub host_id: String,
}

/// Shallow patch for an event.
///
/// `None` => do not change; `Some(v)` => overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<RecordId>,
    /// `Some(None)` clears the password and makes the event public.
    #[serde(
        default,
        deserialize_with = "nullable_patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_count: Option<u64>,
}

impl Event {
    pub fn from_create(id: RecordId, create: EventCreate, created_at: DateTime<Utc>) -> Self {
        let EventCreate {
            name,
            location,
            description,
            date,
            theme,
            password,
            qr_code,
            share_link,
            host_id,
        } = create;

        Self {
            id,
            name,
            location,
            description,
            date,
            theme,
            password,
            qr_code,
            share_link,
            host_id,
            created_at,
            media_count: 0,
        }
    }

    pub fn apply_patch(&mut self, patch: EventPatch) {
        let EventPatch {
            name,
            location,
            description,
            date,
            theme,
            password,
            qr_code,
            share_link,
            host_id,
            media_count,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = date {
            self.date = v;
        }
        if let Some(v) = theme {
            self.theme = v;
        }
        if let Some(v) = password {
            self.password = v;
        }
        if let Some(v) = qr_code {
            self.qr_code = v;
        }
        if let Some(v) = share_link {
            self.share_link = v;
        }
        if let Some(v) = host_id {
            self.host_id = v;
        }
        if let Some(v) = media_count {
            self.media_count = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Event {
        serde_json::from_value(json!({
            "Id": 3,
            "name": "Ava & Tom",
            "location": "Garden Hall",
            "description": "Summer wedding",
            "date": "2025-06-01",
            "theme": 1,
            "password": "rings",
            "qrCode": "qr-1",
            "shareLink": "http://localhost/event/1",
            "hostId": "host-1",
            "createdAt": "2025-01-10T12:00:00Z",
            "mediaCount": 4
        }))
        .expect("valid event fixture")
    }

    #[test]
    fn deserializes_fixture_shape() {
        let event = sample();
        assert_eq!(event.id, 3);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(event.password.as_deref(), Some("rings"));
        assert_eq!(event.media_count, 4);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["Id"], json!(3));
        assert_eq!(back["shareLink"], json!("http://localhost/event/1"));
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut event = sample();
        let before = event.clone();

        event.apply_patch(EventPatch {
            location: Some("Rooftop".to_string()),
            ..Default::default()
        });

        assert_eq!(event.location, "Rooftop");
        assert_eq!(event.name, before.name);
        assert_eq!(event.password, before.password);
        assert_eq!(event.created_at, before.created_at);
        assert_eq!(event.media_count, before.media_count);
    }

    #[test]
    fn null_password_in_patch_clears_it() {
        let patch: EventPatch = serde_json::from_value(json!({ "password": null })).unwrap();
        assert_eq!(patch.password, Some(None));

        let mut event = sample();
        event.apply_patch(patch);
        assert!(event.password.is_none());

        let untouched: EventPatch = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert!(untouched.password.is_none());
    }

    #[test]
    fn from_create_defaults_media_count() {
        let create = EventCreate {
            name: "Party".into(),
            location: "Home".into(),
            description: "Birthday".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
            theme: 2,
            password: None,
            qr_code: String::new(),
            share_link: String::new(),
            host_id: String::new(),
        };
        let now = Utc::now();
        let event = Event::from_create(7, create, now);
        assert_eq!(event.id, 7);
        assert_eq!(event.created_at, now);
        assert_eq!(event.media_count, 0);
    }
}
