use crate::components::calendar_feed::group::group_by_month;
use crate::components::calendar_feed::{CalendarFeedHandle, EventItem, EventSection};
use crate::components::reminders::ReminderHandle;
use crate::error::{AppResult, Error};
use serde::{Deserialize, Serialize};

const LOAD_ERROR_MESSAGE: &str = "Unable to load saved events right now.";
const REMOVE_ERROR_MESSAGE: &str = "Could not remove the event. Please try again.";

/// State of the saved-events tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedViewState {
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    /// Saved events only, ascending by start instant
    pub events: Vec<EventItem>,
}

/// State transitions of the saved screen
#[derive(Debug, Clone)]
pub enum SavedMsg {
    LoadStarted { refresh: bool },
    Loaded(Result<Vec<EventItem>, String>),
    Removed { event_id: String },
    RemoveFailed,
}

impl SavedViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            refreshing: false,
            error: None,
            events: Vec::new(),
        }
    }

    /// Apply one message. The only way this state changes.
    pub fn update(&mut self, msg: SavedMsg) {
        match msg {
            SavedMsg::LoadStarted { refresh } => {
                if refresh {
                    self.refreshing = true;
                } else {
                    self.loading = true;
                }
                self.error = None;
            }
            SavedMsg::Loaded(Ok(events)) => {
                self.events = events;
                self.loading = false;
                self.refreshing = false;
                self.error = None;
            }
            SavedMsg::Loaded(Err(message)) => {
                self.loading = false;
                self.refreshing = false;
                self.error = Some(message);
            }
            SavedMsg::Removed { event_id } => {
                self.events.retain(|event| event.id != event_id);
            }
            SavedMsg::RemoveFailed => {
                self.error = Some(REMOVE_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Month sections for display
    pub fn sections(&self) -> Vec<EventSection> {
        group_by_month(&self.events)
    }
}

impl Default for SavedViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// The saved tab: the calendar feed filtered down to events the user asked
/// to be reminded about. The reminder ledger is the join key.
pub struct SavedScreen {
    feed: CalendarFeedHandle,
    reminders: ReminderHandle,
    pub state: SavedViewState,
}

impl SavedScreen {
    pub fn new(feed: CalendarFeedHandle, reminders: ReminderHandle) -> Self {
        Self {
            feed,
            reminders,
            state: SavedViewState::new(),
        }
    }

    /// Refetch on every activation so a reminder saved in the detail
    /// screen shows up here immediately
    pub async fn load(&mut self, refresh: bool) {
        self.state.update(SavedMsg::LoadStarted { refresh });

        let msg = match self.fetch_saved().await {
            Ok(events) => SavedMsg::Loaded(Ok(events)),
            Err(e) => SavedMsg::Loaded(Err(display_message(&e))),
        };

        self.state.update(msg);
    }

    /// Fetch the feed and keep only the saved events.
    ///
    /// When nothing is saved the network is skipped entirely.
    async fn fetch_saved(&self) -> AppResult<Vec<EventItem>> {
        let saved_ids = self.reminders.list_saved_event_ids().await?;

        if saved_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut events: Vec<EventItem> = self
            .feed
            .events()
            .await?
            .into_iter()
            .filter(|event| saved_ids.contains(&event.id))
            .collect();

        events.sort_by(|a, b| a.start_timestamp.cmp(&b.start_timestamp));

        Ok(events)
    }

    /// Remove a saved event: cancel its reminder, then drop it from the
    /// list. On failure the event stays and the user can retry.
    pub async fn remove_saved_event(&mut self, event_id: &str) -> bool {
        match self.reminders.cancel_reminder(event_id).await {
            Ok(true) => {
                self.state.update(SavedMsg::Removed {
                    event_id: event_id.to_string(),
                });
                true
            }
            Ok(false) | Err(_) => {
                self.state.update(SavedMsg::RemoveFailed);
                false
            }
        }
    }
}

/// Map a load failure to the message the screen shows
fn display_message(error: &Error) -> String {
    match error {
        Error::Api(message) => message.clone(),
        _ => LOAD_ERROR_MESSAGE.to_string(),
    }
}
