use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

/// The platform notification capability, consumed as an opaque interface.
///
/// All three operations report failure through their return values rather
/// than errors, matching the capability contract: permission is a yes/no,
/// a failed schedule yields no identifier, a failed cancel yields false.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Ask for notification permission; false means denied
    async fn request_permission(&self) -> bool;

    /// Schedule a reminder firing at `trigger_ms` (epoch milliseconds);
    /// returns the scheduled identifier, or None when scheduling failed
    async fn schedule(&self, title: &str, body: &str, trigger_ms: i64, data: Value)
        -> Option<String>;

    /// Cancel a scheduled reminder by its identifier
    async fn cancel(&self, identifier: &str) -> bool;
}

/// Stand-in scheduler for local runs of the demo binary.
///
/// Grants permission, logs what would have been scheduled and hands out
/// identifiers without backing delivery.
#[derive(Debug, Clone, Default)]
pub struct LocalNotifier;

#[async_trait]
impl NotificationScheduler for LocalNotifier {
    async fn request_permission(&self) -> bool {
        true
    }

    async fn schedule(
        &self,
        title: &str,
        _body: &str,
        trigger_ms: i64,
        _data: Value,
    ) -> Option<String> {
        let identifier = Uuid::new_v4().to_string();
        let fires_at = Utc
            .timestamp_millis_opt(trigger_ms)
            .single()
            .map(|instant| instant.to_rfc3339())
            .unwrap_or_else(|| trigger_ms.to_string());
        info!("Scheduled reminder {} for '{}' at {}", identifier, title, fires_at);
        Some(identifier)
    }

    async fn cancel(&self, identifier: &str) -> bool {
        info!("Cancelled reminder {}", identifier);
        true
    }
}
