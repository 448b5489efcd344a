use super::models::EventItem;

/// Partition events into upcoming and past relative to `now_ms`.
///
/// The partition runs on `end_timestamp`, not `start_timestamp`: an event
/// that has started but not ended is still upcoming, and an event ending
/// exactly at `now_ms` counts as upcoming. Upcoming sorts soonest first,
/// past sorts most recent first; ties keep the input order (stable sorts).
pub fn partition_events(events: &[EventItem], now_ms: i64) -> (Vec<EventItem>, Vec<EventItem>) {
    let mut upcoming: Vec<EventItem> = events
        .iter()
        .filter(|event| event.end_timestamp >= now_ms)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.start_timestamp.cmp(&b.start_timestamp));

    let mut past: Vec<EventItem> = events
        .iter()
        .filter(|event| event.end_timestamp < now_ms)
        .cloned()
        .collect();
    past.sort_by(|a, b| b.start_timestamp.cmp(&a.start_timestamp));

    (upcoming, past)
}
