mod actor;
mod handle;

pub mod classify;
pub mod group;
pub mod models;
pub mod normalize;

pub use handle::CalendarFeedHandle;
pub use models::{EventItem, EventSection, PAST_EVENTS_DIVIDER_TITLE};

use classify::partition_events;
use group::group_by_month;

/// Assemble the display section list from normalized events.
///
/// Upcoming months always appear; past months appear only when requested,
/// separated from the upcoming ones by a single divider section.
pub fn build_sections(events: &[EventItem], now_ms: i64, show_past: bool) -> Vec<EventSection> {
    let (upcoming, past) = partition_events(events, now_ms);

    let mut sections = group_by_month(&upcoming);

    if show_past && !past.is_empty() {
        sections.push(EventSection::divider());
        sections.extend(group_by_month(&past));
    }

    sections
}
