use serde::{Deserialize, Serialize};

/// Start or end of a raw calendar entry.
///
/// The calendar API sends either `date` (all-day, "YYYY-MM-DD") or
/// `dateTime` (timed, RFC 3339), never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEventTime {
    pub date: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
}

/// One raw calendar entry as returned by the API, before normalization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start: Option<RawEventTime>,
    pub end: Option<RawEventTime>,
}

/// Error payload the calendar API embeds in an otherwise well-formed response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
}

/// Top-level envelope of the calendar events endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub items: Vec<RawEvent>,
}

/// Canonical calendar event, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    /// Stable identifier from the source calendar
    pub id: String,
    pub title: String,
    /// Display string, "2:00 PM" or "All Day"
    pub start_time: String,
    /// Display string; empty when no genuine end time exists
    pub end_time: String,
    /// Short display date, e.g. "Jan 23"
    pub date: String,
    pub location: String,
    /// Plain text, HTML markup already stripped
    pub description: String,
    /// Epoch milliseconds; all temporal comparisons use these
    pub start_timestamp: i64,
    pub end_timestamp: i64,
    /// Grouping key, e.g. "January 2026"
    pub month_key: String,
}

/// Section header title for the past-events divider
pub const PAST_EVENTS_DIVIDER_TITLE: &str = "Past Events";

/// A month-titled (or divider) group of events for sectioned display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSection {
    pub title: String,
    pub items: Vec<EventItem>,
    pub is_divider: bool,
}

impl EventSection {
    /// Create a month section
    pub fn month(title: impl Into<String>, items: Vec<EventItem>) -> Self {
        Self {
            title: title.into(),
            items,
            is_divider: false,
        }
    }

    /// Create the zero-item divider inserted ahead of past-month sections
    pub fn divider() -> Self {
        Self {
            title: PAST_EVENTS_DIVIDER_TITLE.to_string(),
            items: Vec::new(),
            is_divider: true,
        }
    }
}
