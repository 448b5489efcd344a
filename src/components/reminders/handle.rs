use super::actor::{ReminderActor, ReminderActorHandle};
use super::notifier::NotificationScheduler;
use crate::components::storage::KeyValueStore;
use crate::error::AppResult;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the reminder actor
#[derive(Clone)]
pub struct ReminderHandle {
    actor_handle: ReminderActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl ReminderHandle {
    /// Create a new ReminderHandle and spawn the actor
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn NotificationScheduler>,
    ) -> Self {
        let (mut actor, handle) = ReminderActor::new(store, scheduler);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Schedule a reminder for an event and persist its handle
    pub async fn set_reminder(
        &self,
        event_id: &str,
        title: &str,
        body: &str,
        trigger_ms: i64,
    ) -> AppResult<Option<String>> {
        self.actor_handle
            .set_reminder(event_id, title, body, trigger_ms)
            .await
    }

    /// Cancel an event's reminder and remove its persisted record
    pub async fn cancel_reminder(&self, event_id: &str) -> AppResult<bool> {
        self.actor_handle.cancel_reminder(event_id).await
    }

    /// Enumerate the event ids with a persisted reminder record
    pub async fn list_saved_event_ids(&self) -> AppResult<HashSet<String>> {
        self.actor_handle.list_saved_event_ids().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
