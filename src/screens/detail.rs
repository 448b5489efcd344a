use crate::components::calendar_feed::EventItem;
use crate::components::reminders::ReminderHandle;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

const NO_DESCRIPTION_MESSAGE: &str = "No description available for this event.";

/// State of the event detail screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailViewState {
    pub event: EventItem,
    /// Whether a reminder record exists for this event
    pub saved: bool,
}

/// One event's detail view, with the save/remove reminder actions
pub struct DetailScreen {
    reminders: ReminderHandle,
    pub state: DetailViewState,
}

impl DetailScreen {
    pub fn new(reminders: ReminderHandle, event: EventItem, saved: bool) -> Self {
        Self {
            reminders,
            state: DetailViewState { event, saved },
        }
    }

    /// Combined time display: "2:00 PM to 3:30 PM", "All Day", or a
    /// placeholder when the event carries no time at all
    pub fn time_display(&self) -> String {
        let event = &self.state.event;

        if event.start_time.is_empty() {
            "Time not specified".to_string()
        } else if event.end_time.is_empty() {
            event.start_time.clone()
        } else {
            format!("{} to {}", event.start_time, event.end_time)
        }
    }

    /// Description text, with a placeholder when the source had none
    pub fn description_display(&self) -> &str {
        if self.state.event.description.is_empty() {
            NO_DESCRIPTION_MESSAGE
        } else {
            &self.state.event.description
        }
    }

    /// Ask for a reminder `lead_minutes` ahead of the event start.
    ///
    /// Returns Ok(true) when scheduled and persisted, Ok(false) when
    /// permission was denied or scheduling failed (recoverable, show an
    /// alert), and an error when the trigger instant already passed.
    pub async fn save_reminder(&mut self, lead_minutes: i64) -> AppResult<bool> {
        let event = &self.state.event;
        let trigger_ms = event.start_timestamp - lead_minutes * 60_000;
        let body = format!("Starts in {} minutes!", lead_minutes);

        let handle = self
            .reminders
            .set_reminder(&event.id, &event.title, &body, trigger_ms)
            .await?;

        if handle.is_some() {
            self.state.saved = true;
        }

        Ok(handle.is_some())
    }

    /// Cancel this event's reminder; false means nothing changed and the
    /// user can retry
    pub async fn remove_reminder(&mut self) -> AppResult<bool> {
        let removed = self.reminders.cancel_reminder(&self.state.event.id).await?;

        if removed {
            self.state.saved = false;
        }

        Ok(removed)
    }
}
