use super::notifier::NotificationScheduler;
use crate::components::storage::KeyValueStore;
use crate::error::{notification_error, AppResult};
use std::collections::HashSet;
use std::sync::Arc;

/// Namespace prefix for persisted reminder records
pub const REMINDER_KEY_PREFIX: &str = "reminder_";

/// Storage key for one event's reminder record
pub fn reminder_key(event_id: &str) -> String {
    format!("{}{}", REMINDER_KEY_PREFIX, event_id)
}

/// The persisted eventId -> reminder-handle mapping and the operations
/// that keep it consistent with the notification capability.
///
/// The persisted record is the sole source of truth for "is this event
/// saved": no record may exist without a scheduled reminder behind it.
pub struct ReminderLedger {
    store: Arc<dyn KeyValueStore>,
    scheduler: Arc<dyn NotificationScheduler>,
}

impl ReminderLedger {
    pub fn new(store: Arc<dyn KeyValueStore>, scheduler: Arc<dyn NotificationScheduler>) -> Self {
        Self { store, scheduler }
    }

    /// Schedule a reminder for an event and persist its handle.
    ///
    /// A trigger instant that is not strictly in the future is rejected
    /// with an error the caller can show. Permission denial and scheduling
    /// failure return `Ok(None)` so the caller can present a recoverable
    /// message; neither leaves a persisted record behind.
    pub async fn set_reminder(
        &self,
        event_id: &str,
        title: &str,
        body: &str,
        trigger_ms: i64,
        now_ms: i64,
    ) -> AppResult<Option<String>> {
        if trigger_ms <= now_ms {
            return Err(notification_error("Reminder time must be in the future"));
        }

        if !self.scheduler.request_permission().await {
            return Ok(None);
        }

        let data = serde_json::json!({ "eventId": event_id });
        let Some(handle) = self.scheduler.schedule(title, body, trigger_ms, data).await else {
            return Ok(None);
        };

        if let Err(e) = self.store.set(&reminder_key(event_id), &handle).await {
            // A failed save must not leave the reminder scheduled
            let _ = self.scheduler.cancel(&handle).await;
            return Err(e);
        }

        Ok(Some(handle))
    }

    /// Cancel an event's reminder and remove its persisted record.
    ///
    /// Returns false for an unknown event id, and false when the underlying
    /// cancel fails — the record stays intact in that case so the user can
    /// retry.
    pub async fn cancel_reminder(&self, event_id: &str) -> AppResult<bool> {
        let key = reminder_key(event_id);

        let Some(handle) = self.store.get(&key).await? else {
            return Ok(false);
        };

        if !self.scheduler.cancel(&handle).await {
            return Ok(false);
        }

        self.store.remove(&key).await?;
        Ok(true)
    }

    /// Enumerate the event ids with a persisted reminder record.
    ///
    /// Records for events that have already passed are never pruned here;
    /// the saved view simply drops ids the feed no longer contains.
    pub async fn list_saved_event_ids(&self) -> AppResult<HashSet<String>> {
        let keys = self.store.list_keys(REMINDER_KEY_PREFIX).await?;

        Ok(keys
            .iter()
            .filter_map(|key| key.strip_prefix(REMINDER_KEY_PREFIX))
            .map(str::to_string)
            .collect())
    }
}
