use snapshare_schema::Event;

/// `query` must already be trimmed and lowercased.
pub fn matches_query(event: &Event, query: &str) -> bool {
    [&event.name, &event.location, &event.description]
        .into_iter()
        .any(|field| field.to_lowercase().contains(query))
}

/// Filters `events` by a free-text query, keeping their order.
pub fn search_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return events.iter().collect();
    }
    events.iter().filter(|e| matches_query(e, &query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn event(id: u64, name: &str, location: &str, description: &str) -> Event {
        Event {
            id,
            name: name.into(),
            location: location.into(),
            description: description.into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            theme: 1,
            password: None,
            qr_code: String::new(),
            share_link: String::new(),
            host_id: String::new(),
            created_at: Utc::now(),
            media_count: 0,
        }
    }

    #[test]
    fn matches_any_text_field_case_insensitively() {
        let events = vec![
            event(1, "Ava & Tom", "Garden Hall", "Summer wedding"),
            event(2, "Leo turns 30", "Rooftop Bar", "Birthday drinks"),
            event(3, "Offsite", "Lakeside Lodge", "Team WEDDING planning"),
        ];

        let ids = |q: &str| -> Vec<u64> { search_events(&events, q).iter().map(|e| e.id).collect() };

        assert_eq!(ids("wedding"), vec![1, 3]);
        assert_eq!(ids("ROOFTOP"), vec![2]);
        assert_eq!(ids("  garden "), vec![1]);
        assert!(ids("karaoke").is_empty());
    }

    #[test]
    fn blank_query_returns_everything() {
        let events = vec![event(1, "a", "b", "c"), event(2, "d", "e", "f")];
        assert_eq!(search_events(&events, "   ").len(), 2);
        assert_eq!(search_events(&events, "").len(), 2);
    }
}
