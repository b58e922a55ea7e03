use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use snapshare_schema::{EventCreate, RecordId};

use crate::error::ValidationErrors;

/// What a host enters when creating an event, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub theme: Option<RecordId>,
    /// Empty means a public event. Kept exactly as typed otherwise.
    #[serde(default)]
    pub password: Option<String>,
}

impl EventForm {
    /// Checks required fields. `today` is the earliest acceptable event date.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "Event name is required");
        }

        match self.date {
            None => errors.push("date", "Event date is required"),
            Some(date) if date < today => errors.push("date", "Event date cannot be in the past"),
            Some(_) => {}
        }

        if self.location.trim().is_empty() {
            errors.push("location", "Event location is required");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "Event description is required");
        }
        if self.theme.is_none_or(|t| t == 0) {
            errors.push("theme", "Please select a theme");
        }

        errors.into_result()
    }

    /// Shapes a validated form into a create payload with fresh share tokens.
    ///
    /// Tokens are derived from `now` in milliseconds: `qr-<ms>`,
    /// `<origin>/event/<ms>` and `host-<ms>`.
    pub fn into_create(self, origin: &str, now: DateTime<Utc>) -> EventCreate {
        let stamp = now.timestamp_millis();
        let password = self.password.filter(|p| !p.is_empty());

        EventCreate {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.unwrap_or_else(|| now.date_naive()),
            theme: self.theme.unwrap_or_default(),
            password,
            qr_code: format!("qr-{stamp}"),
            share_link: format!("{}/event/{stamp}", origin.trim_end_matches('/')),
            host_id: format!("host-{stamp}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn filled() -> EventForm {
        EventForm {
            name: "Ava & Tom".into(),
            location: "Garden Hall".into(),
            description: "Our wedding day".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
            theme: Some(1),
            password: None,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled().validate(today()).is_ok());
    }

    #[test]
    fn today_is_not_in_the_past() {
        let form = EventForm {
            date: Some(today()),
            ..filled()
        };
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = EventForm::default().validate(today()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("name"), Some("Event name is required"));
        assert_eq!(errors.get("date"), Some("Event date is required"));
        assert_eq!(errors.get("theme"), Some("Please select a theme"));
    }

    #[test]
    fn past_date_and_blank_text_are_rejected() {
        let form = EventForm {
            location: "   ".into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 31),
            theme: Some(0),
            ..filled()
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get("date"), Some("Event date cannot be in the past"));
        assert!(errors.get("location").is_some());
        assert!(errors.get("theme").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn into_create_generates_share_tokens() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let ms = now.timestamp_millis();
        let create = EventForm {
            password: Some(String::new()),
            ..filled()
        }
        .into_create("https://snap.example/", now);

        assert_eq!(create.qr_code, format!("qr-{ms}"));
        assert_eq!(create.share_link, format!("https://snap.example/event/{ms}"));
        assert_eq!(create.host_id, format!("host-{ms}"));
        assert_eq!(create.password, None);
        assert_eq!(create.theme, 1);
    }

    #[test]
    fn password_is_kept_as_typed() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let create = EventForm {
            password: Some(" secret ".into()),
            ..filled()
        }
        .into_create("https://snap.example", now);

        assert_eq!(create.password.as_deref(), Some(" secret "));
    }
}
