// Export components
pub mod calendar_feed;
pub mod reminders;
pub mod storage;

// Re-export the component handles
pub use calendar_feed::CalendarFeedHandle;
pub use reminders::ReminderHandle;
pub use storage::StorageActorHandle;
