use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use snapshare_schema::{Media, MediaType};
use std::str::FromStr;

/// How many items an event page previews before linking to the full gallery.
pub const RECENT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySort {
    #[default]
    Newest,
    Oldest,
    /// Alphabetical by uploader name.
    Uploader,
}

impl FromStr for GallerySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(GallerySort::Newest),
            "oldest" => Ok(GallerySort::Oldest),
            "uploader" => Ok(GallerySort::Uploader),
            other => Err(format!("unknown gallery sort: {other}")),
        }
    }
}

/// Stable in-place sort; ties keep their current order.
pub fn sort_gallery(media: &mut [Media], sort: GallerySort) {
    match sort {
        GallerySort::Newest => media.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at)),
        GallerySort::Oldest => media.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at)),
        GallerySort::Uploader => media.sort_by_cached_key(|m| m.uploader_name.to_lowercase()),
    }
}

/// The preview slice shown on an event page.
pub fn recent(media: &[Media]) -> &[Media] {
    &media[..media.len().min(RECENT_LIMIT)]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    pub photos: usize,
    pub videos: usize,
    /// Distinct uploader display names.
    pub contributors: usize,
}

impl GalleryStats {
    pub fn from_media(media: &[Media]) -> Self {
        let mut uploaders = AHashSet::new();
        let mut stats = GalleryStats::default();
        for m in media {
            match m.media_type {
                MediaType::Photo => stats.photos += 1,
                MediaType::Video => stats.videos += 1,
            }
            uploaders.insert(m.uploader_name.as_str());
        }
        stats.contributors = uploaders.len();
        stats
    }

    pub fn total(&self) -> usize {
        self.photos + self.videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn media(id: u64, kind: MediaType, uploader: &str, minutes: i64) -> Media {
        Media {
            id,
            event_id: 1,
            media_type: kind,
            url: format!("https://cdn.example/{id}"),
            thumbnail_url: String::new(),
            caption: None,
            uploader_id: format!("guest-{uploader}"),
            uploader_name: uploader.to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
                + Duration::minutes(minutes),
            file_name: format!("{id}.jpg"),
            file_size: 100,
        }
    }

    fn ids(media: &[Media]) -> Vec<u64> {
        media.iter().map(|m| m.id).collect()
    }

    #[test]
    fn sorts_by_time_both_ways() {
        let mut items = vec![
            media(1, MediaType::Photo, "Mia", 5),
            media(2, MediaType::Photo, "Ben", 1),
            media(3, MediaType::Video, "ana", 9),
        ];

        sort_gallery(&mut items, GallerySort::Newest);
        assert_eq!(ids(&items), vec![3, 1, 2]);

        sort_gallery(&mut items, GallerySort::Oldest);
        assert_eq!(ids(&items), vec![2, 1, 3]);
    }

    #[test]
    fn uploader_sort_ignores_case() {
        let mut items = vec![
            media(1, MediaType::Photo, "Mia", 5),
            media(2, MediaType::Photo, "Ben", 1),
            media(3, MediaType::Video, "ana", 9),
        ];
        sort_gallery(&mut items, GallerySort::Uploader);
        assert_eq!(ids(&items), vec![3, 2, 1]);
    }

    #[test]
    fn parses_sort_names() {
        assert_eq!("Oldest".parse::<GallerySort>(), Ok(GallerySort::Oldest));
        assert_eq!(" uploader ".parse::<GallerySort>(), Ok(GallerySort::Uploader));
        assert!("random".parse::<GallerySort>().is_err());
    }

    #[test]
    fn recent_caps_preview() {
        let items: Vec<Media> = (1..=11)
            .map(|i| media(i, MediaType::Photo, "Mia", i64::try_from(i).unwrap()))
            .collect();
        assert_eq!(recent(&items).len(), RECENT_LIMIT);
        assert_eq!(recent(&items[..3]).len(), 3);
        assert!(recent(&[]).is_empty());
    }

    #[test]
    fn stats_count_types_and_contributors() {
        let items = vec![
            media(1, MediaType::Photo, "Mia", 1),
            media(2, MediaType::Video, "Mia", 2),
            media(3, MediaType::Photo, "Ben", 3),
        ];
        let stats = GalleryStats::from_media(&items);
        assert_eq!(stats.photos, 2);
        assert_eq!(stats.videos, 1);
        assert_eq!(stats.contributors, 2);
        assert_eq!(stats.total(), 3);
        assert_eq!(GalleryStats::from_media(&[]), GalleryStats::default());
    }
}
