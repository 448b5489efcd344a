use chapter_events::components::calendar_feed::classify::partition_events;
use chapter_events::components::calendar_feed::group::group_by_month;
use chapter_events::components::calendar_feed::models::{EventItem, EventsResponse};
use chapter_events::components::calendar_feed::normalize::normalize_entries;
use chapter_events::components::calendar_feed::{build_sections, PAST_EVENTS_DIVIDER_TITLE};

fn item(id: &str, start: i64, end: i64, month: &str) -> EventItem {
    EventItem {
        id: id.to_string(),
        title: format!("Event {}", id),
        start_time: "10:00 AM".to_string(),
        end_time: String::new(),
        date: "Jan 1".to_string(),
        location: "TBD".to_string(),
        description: String::new(),
        start_timestamp: start,
        end_timestamp: end,
        month_key: month.to_string(),
    }
}

/// The upcoming/past boundary runs on the end timestamp and is inclusive
/// for upcoming
#[test]
fn test_partition_boundary() {
    let now = 1_000_000;
    let events = vec![
        item("ended", 500, now - 1, "January 2026"),
        item("ending-now", 600, now, "January 2026"),
        item("running", 700, now + 50, "January 2026"),
    ];

    let (upcoming, past) = partition_events(&events, now);

    assert_eq!(
        upcoming.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["ending-now", "running"]
    );
    assert_eq!(
        past.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["ended"]
    );
}

/// Upcoming sorts soonest first, past sorts most recent first
#[test]
fn test_partition_ordering() {
    let now = 10_000;

    let upcoming_input = vec![
        item("u300", 300, now + 1, "January 2026"),
        item("u100", 100, now + 1, "January 2026"),
        item("u200", 200, now + 1, "January 2026"),
    ];
    let (upcoming, _) = partition_events(&upcoming_input, now);
    assert_eq!(
        upcoming.iter().map(|e| e.start_timestamp).collect::<Vec<_>>(),
        vec![100, 200, 300]
    );

    let past_input = vec![
        item("p100", 100, 1, "January 2026"),
        item("p300", 300, 1, "January 2026"),
        item("p200", 200, 1, "January 2026"),
    ];
    let (_, past) = partition_events(&past_input, now);
    assert_eq!(
        past.iter().map(|e| e.start_timestamp).collect::<Vec<_>>(),
        vec![300, 200, 100]
    );
}

/// Ties keep the input order
#[test]
fn test_partition_stable_ties() {
    let now = 10_000;
    let events = vec![
        item("first", 100, now + 1, "January 2026"),
        item("second", 100, now + 1, "January 2026"),
    ];

    let (upcoming, _) = partition_events(&events, now);

    assert_eq!(upcoming[0].id, "first");
    assert_eq!(upcoming[1].id, "second");
}

/// Sections follow the first occurrence of each month, not alphabetical
/// or chronological order
#[test]
fn test_group_first_seen_order() {
    let events = vec![
        item("a", 1, 2, "February 2026"),
        item("b", 3, 4, "January 2026"),
        item("c", 5, 6, "February 2026"),
    ];

    let sections = group_by_month(&events);

    assert_eq!(
        sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        vec!["February 2026", "January 2026"]
    );
    assert_eq!(
        sections[0].items.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "c"]
    );
    assert!(sections.iter().all(|s| !s.items.is_empty()));
}

/// No divider and no past months unless past events are requested
#[test]
fn test_build_sections_hides_past_by_default() {
    let now = 10_000;
    let events = vec![
        item("up", now, now + 100, "February 2026"),
        item("gone", 1, 2, "January 2026"),
    ];

    let sections = build_sections(&events, now, false);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "February 2026");
    assert!(!sections.iter().any(|s| s.is_divider));
}

/// With past events enabled, one divider separates upcoming from past
#[test]
fn test_build_sections_with_past() {
    let now = 10_000;
    let events = vec![
        item("up", now, now + 100, "February 2026"),
        item("gone", 1, 2, "January 2026"),
        item("older", 0, 1, "December 2025"),
    ];

    let sections = build_sections(&events, now, true);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "February 2026",
            PAST_EVENTS_DIVIDER_TITLE,
            "January 2026",
            "December 2025"
        ]
    );
    assert!(sections[1].is_divider);
    assert!(sections[1].items.is_empty());
}

/// No past events means no divider even when past is enabled
#[test]
fn test_build_sections_no_divider_without_past_events() {
    let now = 10_000;
    let events = vec![item("up", now, now + 100, "February 2026")];

    let sections = build_sections(&events, now, true);

    assert_eq!(sections.len(), 1);
    assert!(!sections[0].is_divider);
}

/// A fetch payload with one all-day and one timed event in the same month
/// yields exactly one section when both are upcoming, and none when both
/// are past and past events are hidden
#[test]
fn test_feed_payload_to_sections() {
    let payload = r#"{
        "items": [
            {
                "id": "allday",
                "summary": "Field Day",
                "start": { "date": "2099-05-01" },
                "end": { "date": "2099-05-02" }
            },
            {
                "id": "timed",
                "summary": "General Meeting",
                "location": "Union Cinema",
                "start": { "dateTime": "2099-05-10T10:00:00Z" },
                "end": { "dateTime": "2099-05-10T11:30:00Z" }
            }
        ]
    }"#;

    let envelope: EventsResponse = serde_json::from_str(payload).unwrap();
    assert!(envelope.error.is_none());

    let events = normalize_entries(&envelope.items, chrono_tz::UTC);
    assert_eq!(events.len(), 2);

    // Both events are far in the future relative to this instant
    let now = 1_000_000;
    let sections = build_sections(&events, now, false);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "May 2099");
    assert_eq!(sections[0].items.len(), 2);

    // Same payload, observed after both events have ended
    let after = events.iter().map(|e| e.end_timestamp).max().unwrap() + 1;
    let sections = build_sections(&events, after, false);
    assert!(sections.is_empty());
}

/// An error envelope decodes with its message intact
#[test]
fn test_error_envelope_decodes() {
    let payload = r#"{
        "error": { "code": 403, "message": "The request is missing a valid API key." }
    }"#;

    let envelope: EventsResponse = serde_json::from_str(payload).unwrap();

    let error = envelope.error.unwrap();
    assert_eq!(error.code, Some(403));
    assert_eq!(
        error.message.as_deref(),
        Some("The request is missing a valid API key.")
    );
    assert!(envelope.items.is_empty());
}
