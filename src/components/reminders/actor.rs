use super::ledger::ReminderLedger;
use super::notifier::NotificationScheduler;
use crate::components::storage::KeyValueStore;
use crate::error::{notification_error, AppResult};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// The reminder actor that processes messages.
///
/// Running every ledger operation through one mailbox serializes them, so
/// two calls touching the same event id can never interleave.
pub struct ReminderActor {
    ledger: ReminderLedger,
    command_rx: mpsc::Receiver<ReminderCommand>,
}

/// Commands that can be sent to the reminder actor
pub enum ReminderCommand {
    SetReminder {
        event_id: String,
        title: String,
        body: String,
        trigger_ms: i64,
        response_tx: mpsc::Sender<AppResult<Option<String>>>,
    },
    CancelReminder {
        event_id: String,
        response_tx: mpsc::Sender<AppResult<bool>>,
    },
    ListSavedEventIds {
        response_tx: mpsc::Sender<AppResult<HashSet<String>>>,
    },
    Shutdown,
}

/// Handle for communicating with the reminder actor
#[derive(Clone)]
pub struct ReminderActorHandle {
    command_tx: mpsc::Sender<ReminderCommand>,
}

impl ReminderActorHandle {
    /// Schedule a reminder for an event and persist its handle
    pub async fn set_reminder(
        &self,
        event_id: &str,
        title: &str,
        body: &str,
        trigger_ms: i64,
    ) -> AppResult<Option<String>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ReminderCommand::SetReminder {
                event_id: event_id.to_string(),
                title: title.to_string(),
                body: body.to_string(),
                trigger_ms,
                response_tx,
            })
            .await
            .map_err(|e| notification_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| notification_error("Response channel closed"))?
    }

    /// Cancel an event's reminder and remove its persisted record
    pub async fn cancel_reminder(&self, event_id: &str) -> AppResult<bool> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ReminderCommand::CancelReminder {
                event_id: event_id.to_string(),
                response_tx,
            })
            .await
            .map_err(|e| notification_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| notification_error("Response channel closed"))?
    }

    /// Enumerate the event ids with a persisted reminder record
    pub async fn list_saved_event_ids(&self) -> AppResult<HashSet<String>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ReminderCommand::ListSavedEventIds { response_tx })
            .await
            .map_err(|e| notification_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| notification_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(ReminderCommand::Shutdown).await;
        Ok(())
    }
}

impl ReminderActor {
    /// Create a new actor and return its handle
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn NotificationScheduler>,
    ) -> (Self, ReminderActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            ledger: ReminderLedger::new(store, scheduler),
            command_rx,
        };

        let handle = ReminderActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Reminder actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                ReminderCommand::SetReminder {
                    event_id,
                    title,
                    body,
                    trigger_ms,
                    response_tx,
                } => {
                    let now_ms = Utc::now().timestamp_millis();
                    let result = self
                        .ledger
                        .set_reminder(&event_id, &title, &body, trigger_ms, now_ms)
                        .await;
                    let _ = response_tx.send(result).await;
                }
                ReminderCommand::CancelReminder {
                    event_id,
                    response_tx,
                } => {
                    let result = self.ledger.cancel_reminder(&event_id).await;
                    let _ = response_tx.send(result).await;
                }
                ReminderCommand::ListSavedEventIds { response_tx } => {
                    let result = self.ledger.list_saved_event_ids().await;
                    let _ = response_tx.send(result).await;
                }
                ReminderCommand::Shutdown => {
                    info!("Reminder actor shutting down");
                    break;
                }
            }
        }

        info!("Reminder actor shut down");
    }
}
