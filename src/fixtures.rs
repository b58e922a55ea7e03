//! Seed data for the entity stores.
//!
//! Each kind ships a built-in JSON fixture; configuration can point a store at
//! an external file with the same shape instead. Seeds are read once, at
//! store construction.

use serde::de::DeserializeOwned;
use snapshare_schema::{Event, Media, Theme};
use std::path::Path;
use tracing::{info, warn};

use crate::error::SnapshareError;
use crate::store::StoreRecord;

/// A record kind with a built-in seed dataset.
pub trait Fixture: StoreRecord + DeserializeOwned {
    const BUILTIN: &'static str;
}

impl Fixture for Event {
    const BUILTIN: &'static str = include_str!("../fixtures/events.json");
}

impl Fixture for Media {
    const BUILTIN: &'static str = include_str!("../fixtures/media.json");
}

impl Fixture for Theme {
    const BUILTIN: &'static str = include_str!("../fixtures/themes.json");
}

/// Parses a JSON array of records.
pub fn parse_seed<R: DeserializeOwned>(json: &str) -> Result<Vec<R>, SnapshareError> {
    Ok(serde_json::from_str(json)?)
}

pub fn builtin<R: Fixture>() -> Result<Vec<R>, SnapshareError> {
    parse_seed(R::BUILTIN)
}

/// Loads the seed for `R`: the file at `seed_file` if given, else the
/// built-in fixture.
pub fn load<R: Fixture>(seed_file: Option<&Path>) -> Result<Vec<R>, SnapshareError> {
    let Some(path) = seed_file else {
        return builtin();
    };

    let raw = std::fs::read_to_string(path).inspect_err(|e| {
        warn!(kind = %R::KIND, path = %path.display(), error = %e, "seed file unreadable");
    })?;
    let seed: Vec<R> = parse_seed(&raw).inspect_err(|e| {
        warn!(kind = %R::KIND, path = %path.display(), error = %e, "seed file malformed");
    })?;

    info!(kind = %R::KIND, path = %path.display(), records = seed.len(), "seed loaded from file");
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn assert_unique_ids<R: StoreRecord>(records: &[R]) {
        let ids: AHashSet<_> = records.iter().map(StoreRecord::id).collect();
        assert_eq!(ids.len(), records.len(), "duplicate ids in {} fixture", R::KIND);
    }

    #[test]
    fn builtin_fixtures_parse() {
        let events = builtin::<Event>().unwrap();
        let media = builtin::<Media>().unwrap();
        let themes = builtin::<Theme>().unwrap();

        assert!(!events.is_empty());
        assert!(!media.is_empty());
        assert!(!themes.is_empty());

        assert_unique_ids(&events);
        assert_unique_ids(&media);
        assert_unique_ids(&themes);
    }

    #[test]
    fn malformed_seed_is_a_json_error() {
        let err = parse_seed::<Theme>(r#"[{"Id": "one"}]"#).unwrap_err();
        assert!(matches!(err, SnapshareError::JsonError(_)));
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let path = std::env::temp_dir().join("snapshare-missing-seed-file.json");
        let err = load::<Theme>(Some(&path)).unwrap_err();
        assert!(matches!(err, SnapshareError::IoError(_)));
    }

    #[test]
    fn seed_file_overrides_builtin() {
        let path = std::env::temp_dir().join(format!("snapshare-themes-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r##"[{"Id": 7, "name": "Neon", "primaryColor": "#0ff"}]"##,
        )
        .unwrap();

        let themes = load::<Theme>(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].id, 7);
        assert!(themes[0].background_image.is_empty());
    }
}
