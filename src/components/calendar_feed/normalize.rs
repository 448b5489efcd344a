use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

use super::models::{EventItem, RawEvent, RawEventTime};
use crate::utils::text::strip_html;

/// Title used when the source entry has no summary
pub const DEFAULT_TITLE: &str = "No Title";

/// Location used when the source entry has no location
pub const DEFAULT_LOCATION: &str = "TBD";

/// Start-time label for date-only entries
pub const ALL_DAY_LABEL: &str = "All Day";

/// Assumed duration when the source provides no genuine end time
pub const ASSUMED_DURATION_MS: i64 = 60 * 60 * 1000;

/// Resolve a raw start/end into an instant in the display timezone.
///
/// Timed entries carry an RFC 3339 `dateTime`; all-day entries carry a
/// date-only string which resolves to midnight in the display timezone.
fn parse_instant(time: &RawEventTime, tz: Tz) -> Option<DateTime<Tz>> {
    if let Some(date_time) = &time.date_time {
        match DateTime::parse_from_rfc3339(date_time) {
            Ok(instant) => Some(instant.with_timezone(&tz)),
            Err(e) => {
                warn!("Failed to parse event dateTime '{}': {}", date_time, e);
                None
            }
        }
    } else if let Some(date) = &time.date {
        let parsed = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to parse event date '{}': {}", date, e);
                return None;
            }
        };
        let midnight = parsed.and_hms_opt(0, 0, 0)?;
        match tz.from_local_datetime(&midnight).single() {
            Some(instant) => Some(instant),
            None => {
                warn!("No unambiguous local midnight for '{}'", date);
                None
            }
        }
    } else {
        None
    }
}

/// Localized short time, e.g. "2:00 PM"
fn format_clock(instant: &DateTime<Tz>) -> String {
    instant.format("%-I:%M %p").to_string()
}

/// Convert one raw calendar entry into a canonical [`EventItem`].
///
/// Entries with no usable start information are rejected; a malformed
/// single entry never fails the whole feed. All display strings use fixed
/// English patterns so output does not depend on the ambient locale.
pub fn normalize_entry(raw: &RawEvent, tz: Tz) -> Option<EventItem> {
    let Some(start) = raw.start.as_ref() else {
        warn!("Event missing start time: {}", raw.id);
        return None;
    };

    let is_all_day = start.date.is_some();
    let start_instant = parse_instant(start, tz)?;
    let start_timestamp = start_instant.timestamp_millis();

    // A genuine end has to land after the start; anything else gets the
    // assumed one-hour duration so past/upcoming classification still works.
    let end_instant = raw
        .end
        .as_ref()
        .and_then(|end| parse_instant(end, tz))
        .filter(|end| end.timestamp_millis() > start_timestamp);

    let end_timestamp = end_instant
        .as_ref()
        .map(|end| end.timestamp_millis())
        .unwrap_or(start_timestamp + ASSUMED_DURATION_MS);

    let start_time = if is_all_day {
        ALL_DAY_LABEL.to_string()
    } else {
        format_clock(&start_instant)
    };

    let end_time = match &end_instant {
        Some(end) if !is_all_day => format_clock(end),
        _ => String::new(),
    };

    let title = raw
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let location = raw
        .location
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOCATION)
        .to_string();

    Some(EventItem {
        id: raw.id.clone(),
        title,
        start_time,
        end_time,
        date: start_instant.format("%b %-d").to_string(),
        location,
        description: strip_html(raw.description.as_deref().unwrap_or("")),
        start_timestamp,
        end_timestamp,
        month_key: start_instant.format("%B %Y").to_string(),
    })
}

/// Normalize a whole fetch result, discarding rejects and keeping the
/// original relative order of the valid entries
pub fn normalize_entries(items: &[RawEvent], tz: Tz) -> Vec<EventItem> {
    items
        .iter()
        .filter_map(|raw| normalize_entry(raw, tz))
        .collect()
}
