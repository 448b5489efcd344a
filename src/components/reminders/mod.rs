mod actor;
mod handle;

pub mod ledger;
pub mod notifier;

pub use handle::ReminderHandle;
pub use ledger::{reminder_key, ReminderLedger, REMINDER_KEY_PREFIX};
pub use notifier::{LocalNotifier, NotificationScheduler};
