use async_trait::async_trait;
use chapter_events::components::reminders::{
    reminder_key, LocalNotifier, NotificationScheduler, ReminderHandle, ReminderLedger,
};
use chapter_events::components::storage::KeyValueStore;
use chapter_events::error::{AppResult, Error};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock implementation of the persistence store for testing
#[derive(Debug, Clone, Default)]
struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self::default()
    }

    async fn contains(&self, key: &str) -> bool {
        self.data.lock().await.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.data
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.data.lock().await.remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        Ok(self
            .data
            .lock()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Scriptable mock of the notification capability
#[derive(Debug, Clone)]
struct MockScheduler {
    permission: bool,
    schedule_succeeds: bool,
    cancel_succeeds: bool,
    cancelled: Arc<Mutex<Vec<String>>>,
}

impl MockScheduler {
    fn granting() -> Self {
        Self {
            permission: true,
            schedule_succeeds: true,
            cancel_succeeds: true,
            cancelled: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl NotificationScheduler for MockScheduler {
    async fn request_permission(&self) -> bool {
        self.permission
    }

    async fn schedule(
        &self,
        title: &str,
        _body: &str,
        _trigger_ms: i64,
        _data: Value,
    ) -> Option<String> {
        if self.schedule_succeeds {
            Some(format!("scheduled-{}", title))
        } else {
            None
        }
    }

    async fn cancel(&self, identifier: &str) -> bool {
        self.cancelled.lock().await.push(identifier.to_string());
        self.cancel_succeeds
    }
}

fn ledger(store: &MemoryStore, scheduler: &MockScheduler) -> ReminderLedger {
    ReminderLedger::new(Arc::new(store.clone()), Arc::new(scheduler.clone()))
}

/// A trigger instant that is not strictly in the future is rejected and
/// writes no record
#[tokio::test]
async fn test_set_reminder_rejects_past_trigger() {
    let store = MemoryStore::new();
    let ledger = ledger(&store, &MockScheduler::granting());

    let result = ledger
        .set_reminder("evt", "Meeting", "Starts soon", 1_000, 2_000)
        .await;

    assert!(matches!(result, Err(Error::Notification(_))));
    assert!(!store.contains(&reminder_key("evt")).await);
}

/// The boundary instant itself is not in the future
#[tokio::test]
async fn test_set_reminder_rejects_trigger_at_now() {
    let store = MemoryStore::new();
    let ledger = ledger(&store, &MockScheduler::granting());

    let result = ledger
        .set_reminder("evt", "Meeting", "Starts soon", 2_000, 2_000)
        .await;

    assert!(result.is_err());
}

/// Permission denial is a recoverable None, never an error, and leaves
/// no record
#[tokio::test]
async fn test_set_reminder_permission_denied() {
    let store = MemoryStore::new();
    let mut scheduler = MockScheduler::granting();
    scheduler.permission = false;
    let ledger = ledger(&store, &scheduler);

    let handle = ledger
        .set_reminder("evt", "Meeting", "Starts soon", 5_000, 2_000)
        .await
        .unwrap();

    assert!(handle.is_none());
    assert!(!store.contains(&reminder_key("evt")).await);
}

/// A scheduling failure is a recoverable None and leaves no record
#[tokio::test]
async fn test_set_reminder_schedule_failure() {
    let store = MemoryStore::new();
    let mut scheduler = MockScheduler::granting();
    scheduler.schedule_succeeds = false;
    let ledger = ledger(&store, &scheduler);

    let handle = ledger
        .set_reminder("evt", "Meeting", "Starts soon", 5_000, 2_000)
        .await
        .unwrap();

    assert!(handle.is_none());
    assert!(!store.contains(&reminder_key("evt")).await);
}

/// A successful set persists the scheduler's handle under the event key
#[tokio::test]
async fn test_set_reminder_persists_handle() {
    let store = MemoryStore::new();
    let ledger = ledger(&store, &MockScheduler::granting());

    let handle = ledger
        .set_reminder("evt", "Meeting", "Starts soon", 5_000, 2_000)
        .await
        .unwrap();

    assert_eq!(handle.as_deref(), Some("scheduled-Meeting"));
    assert_eq!(
        store.get(&reminder_key("evt")).await.unwrap().as_deref(),
        Some("scheduled-Meeting")
    );
}

/// Cancelling an unknown event id returns false without error
#[tokio::test]
async fn test_cancel_reminder_unknown_id() {
    let store = MemoryStore::new();
    let ledger = ledger(&store, &MockScheduler::granting());

    let cancelled = ledger.cancel_reminder("nope").await.unwrap();

    assert!(!cancelled);
}

/// A failed capability cancel leaves the record intact for retry
#[tokio::test]
async fn test_cancel_reminder_failure_keeps_record() {
    let store = MemoryStore::new();
    let mut scheduler = MockScheduler::granting();
    scheduler.cancel_succeeds = false;
    let ledger = ledger(&store, &scheduler);

    ledger
        .set_reminder("evt", "Meeting", "Starts soon", 5_000, 2_000)
        .await
        .unwrap();

    let cancelled = ledger.cancel_reminder("evt").await.unwrap();

    assert!(!cancelled);
    assert!(store.contains(&reminder_key("evt")).await);
}

/// A successful cancel removes the record and the scheduled reminder
#[tokio::test]
async fn test_cancel_reminder_removes_record() {
    let store = MemoryStore::new();
    let scheduler = MockScheduler::granting();
    let ledger = ledger(&store, &scheduler);

    ledger
        .set_reminder("evt", "Meeting", "Starts soon", 5_000, 2_000)
        .await
        .unwrap();

    let cancelled = ledger.cancel_reminder("evt").await.unwrap();

    assert!(cancelled);
    assert!(!store.contains(&reminder_key("evt")).await);
    assert_eq!(
        scheduler.cancelled.lock().await.as_slice(),
        ["scheduled-Meeting"]
    );
}

/// Listing decodes event ids from the namespaced keys and ignores other
/// namespaces
#[tokio::test]
async fn test_list_saved_event_ids() {
    let store = MemoryStore::new();
    store.set("reminder_a", "h1").await.unwrap();
    store.set("reminder_b", "h2").await.unwrap();
    store.set("other_c", "h3").await.unwrap();
    let ledger = ledger(&store, &MockScheduler::granting());

    let ids = ledger.list_saved_event_ids().await.unwrap();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains("a"));
    assert!(ids.contains("b"));
}

/// The actor-backed handle runs the same ledger semantics end to end
#[tokio::test]
async fn test_reminder_handle_round_trip() {
    let store = MemoryStore::new();
    let handle = ReminderHandle::new(
        Arc::new(store.clone()),
        Arc::new(MockScheduler::granting()),
    );

    let future_ms = Utc::now().timestamp_millis() + 60_000;
    let reminder = handle
        .set_reminder("evt", "Meeting", "Starts soon", future_ms)
        .await
        .unwrap();
    assert!(reminder.is_some());

    let ids = handle.list_saved_event_ids().await.unwrap();
    assert!(ids.contains("evt"));

    assert!(handle.cancel_reminder("evt").await.unwrap());
    assert!(handle.list_saved_event_ids().await.unwrap().is_empty());

    handle.shutdown().await.unwrap();
}

/// The local stand-in scheduler grants, schedules and cancels
#[tokio::test]
async fn test_local_notifier() {
    let notifier = LocalNotifier;

    assert!(notifier.request_permission().await);
    let id = notifier
        .schedule("Meeting", "Starts soon", 5_000, Value::Null)
        .await;
    assert!(id.is_some());
    assert!(notifier.cancel(&id.unwrap()).await);
}
