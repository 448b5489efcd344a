use crate::components::calendar_feed::{CalendarFeedHandle, EventSection};
use crate::components::reminders::{LocalNotifier, ReminderHandle};
use crate::components::storage::StorageActor;
use crate::config::Config;
use crate::error::Error;
use crate::screens::{CalendarScreen, SavedScreen};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Start the services and print the current feed and saved events
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Initialize storage service
    let (mut storage_actor, storage_handle) = StorageActor::new(Arc::clone(&config));

    // Spawn storage actor task
    tokio::spawn(async move {
        storage_actor.run().await;
    });

    let feed_handle = CalendarFeedHandle::new(Arc::clone(&config));
    let reminder_handle = ReminderHandle::new(
        Arc::new(storage_handle.clone()),
        Arc::new(LocalNotifier),
    );

    // Calendar tab
    let mut calendar = CalendarScreen::new(feed_handle.clone());
    calendar.load(false).await;

    match &calendar.state.error {
        Some(message) => error!("Could not load the event feed: {}", message),
        None => {
            if let Some(empty) = calendar.state.empty_feed() {
                info!("{} - {}", empty.title, empty.message);
            } else {
                print_sections(&calendar.state.sections());
            }
        }
    }

    // Saved tab
    let mut saved = SavedScreen::new(feed_handle.clone(), reminder_handle.clone());
    saved.load(false).await;

    match &saved.state.error {
        Some(message) => warn!("Saved events unavailable: {}", message),
        None if saved.state.events.is_empty() => info!("No saved events"),
        None => {
            println!("Saved events:");
            print_sections(&saved.state.sections());
        }
    }

    reminder_handle.shutdown().await?;
    feed_handle.shutdown().await?;
    storage_handle.shutdown().await?;

    Ok(())
}

/// Render a section list to stdout
fn print_sections(sections: &[EventSection]) {
    for section in sections {
        if section.is_divider {
            println!("--- {} ---", section.title);
            continue;
        }

        println!("{}", section.title);
        for item in &section.items {
            let time = if item.end_time.is_empty() {
                item.start_time.clone()
            } else {
                format!("{} to {}", item.start_time, item.end_time)
            };
            println!("  {}  {}  {} ({})", item.date, time, item.title, item.location);
        }
    }
}
