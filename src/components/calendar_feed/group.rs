use super::models::{EventItem, EventSection};

/// Bucket an ordered event sequence into month sections.
///
/// Section order follows the first occurrence of each `month_key` in the
/// input, so the sections inherit whatever order the events were already
/// sorted in. Items sharing a month keep their relative input order. No
/// section is emitted for a month with zero items.
pub fn group_by_month(events: &[EventItem]) -> Vec<EventSection> {
    let mut sections: Vec<EventSection> = Vec::new();

    for event in events {
        match sections
            .iter_mut()
            .find(|section| section.title == event.month_key)
        {
            Some(section) => section.items.push(event.clone()),
            None => sections.push(EventSection::month(event.month_key.clone(), vec![event.clone()])),
        }
    }

    sections
}
