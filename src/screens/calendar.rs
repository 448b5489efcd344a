use crate::components::calendar_feed::{build_sections, CalendarFeedHandle, EventItem, EventSection};
use crate::error::Error;
use crate::utils::ticker::ScreenClock;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Message shown on a network failure
const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect. Please check your internet connection and try again.";

/// Everything the calendar screen owns, serializable so the screen can be
/// rebuilt from state. Sections are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarViewState {
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    /// Show past events below the upcoming ones (default off)
    pub show_past: bool,
    pub events: Vec<EventItem>,
    /// Reference instant for upcoming/past classification
    pub now_ms: i64,
}

/// State transitions of the calendar screen
#[derive(Debug, Clone)]
pub enum CalendarMsg {
    LoadStarted { refresh: bool },
    FeedLoaded(Result<Vec<EventItem>, String>),
    TogglePastEvents,
    Tick(i64),
}

/// Empty-feed text, distinguished by the current filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyFeed {
    pub title: &'static str,
    pub message: &'static str,
}

impl CalendarViewState {
    pub fn new(now_ms: i64) -> Self {
        Self {
            loading: true,
            refreshing: false,
            error: None,
            show_past: false,
            events: Vec::new(),
            now_ms,
        }
    }

    /// Apply one message. The only way this state changes.
    pub fn update(&mut self, msg: CalendarMsg) {
        match msg {
            CalendarMsg::LoadStarted { refresh } => {
                if refresh {
                    self.refreshing = true;
                } else {
                    self.loading = true;
                }
                self.error = None;
            }
            CalendarMsg::FeedLoaded(Ok(events)) => {
                self.events = events;
                self.loading = false;
                self.refreshing = false;
                self.error = None;
            }
            CalendarMsg::FeedLoaded(Err(message)) => {
                self.loading = false;
                self.refreshing = false;
                self.error = Some(message);
            }
            CalendarMsg::TogglePastEvents => {
                self.show_past = !self.show_past;
            }
            CalendarMsg::Tick(now_ms) => {
                self.now_ms = now_ms;
            }
        }
    }

    /// The section list to display, derived from the current state
    pub fn sections(&self) -> Vec<EventSection> {
        build_sections(&self.events, self.now_ms, self.show_past)
    }

    /// Empty-state text when a successful load produced nothing to show
    pub fn empty_feed(&self) -> Option<EmptyFeed> {
        if self.loading || self.error.is_some() || !self.sections().is_empty() {
            return None;
        }

        Some(if self.show_past {
            EmptyFeed {
                title: "No Events Found",
                message: "There are no events in the calendar.",
            }
        } else {
            EmptyFeed {
                title: "No Upcoming Events",
                message: "Check back later for upcoming events!",
            }
        })
    }
}

/// The calendar tab: feed list with month sections, past-events toggle,
/// pull-to-refresh and a minute clock that reclassifies without refetching
pub struct CalendarScreen {
    feed: CalendarFeedHandle,
    pub state: CalendarViewState,
}

impl CalendarScreen {
    pub fn new(feed: CalendarFeedHandle) -> Self {
        Self {
            feed,
            state: CalendarViewState::new(Utc::now().timestamp_millis()),
        }
    }

    /// Load the feed; called on activation, manual retry and pull-to-refresh
    pub async fn load(&mut self, refresh: bool) {
        self.state.update(CalendarMsg::LoadStarted { refresh });

        let msg = match self.feed.events().await {
            Ok(events) => CalendarMsg::FeedLoaded(Ok(events)),
            Err(e) => CalendarMsg::FeedLoaded(Err(display_message(&e))),
        };

        self.state.update(CalendarMsg::Tick(Utc::now().timestamp_millis()));
        self.state.update(msg);
    }

    /// Flip the past-events filter
    pub fn toggle_past_events(&mut self) {
        self.state.update(CalendarMsg::TogglePastEvents);
    }

    /// Apply a clock tick from the screen's minute ticker
    pub fn apply_tick(&mut self, now_ms: i64) {
        self.state.update(CalendarMsg::Tick(now_ms));
    }

    /// Start the screen's minute clock; the caller feeds received ticks
    /// back through [`CalendarScreen::apply_tick`] and stops the clock on
    /// teardown
    pub fn start_clock(&self) -> ScreenClock {
        ScreenClock::start()
    }
}

/// Map a pipeline failure to the message the screen shows
fn display_message(error: &Error) -> String {
    match error {
        Error::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        Error::Api(message) => message.clone(),
        other => other.to_string(),
    }
}
