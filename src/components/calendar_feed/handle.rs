use super::actor::{CalendarFeedActor, CalendarFeedActorHandle};
use super::build_sections;
use super::models::{EventItem, EventSection};
use crate::config::Config;
use crate::error::AppResult;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the calendar feed actor
#[derive(Clone)]
pub struct CalendarFeedHandle {
    actor_handle: CalendarFeedActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarFeedHandle {
    /// Create a new CalendarFeedHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        let (mut actor, handle) = CalendarFeedActor::new(config);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch and normalize the full event feed
    pub async fn events(&self) -> AppResult<Vec<EventItem>> {
        self.actor_handle.get_events().await
    }

    /// Load the display feed: fetch, normalize, classify against the
    /// current instant and group into month sections
    pub async fn load_feed(&self, show_past: bool) -> AppResult<Vec<EventSection>> {
        let events = self.events().await?;
        let now_ms = Utc::now().timestamp_millis();
        Ok(build_sections(&events, now_ms, show_past))
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
