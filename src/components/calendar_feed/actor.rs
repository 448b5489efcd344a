use super::models::{EventItem, EventsResponse};
use super::normalize::normalize_entries;
use crate::config::Config;
use crate::error::{api_error, network_error, AppResult};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tracing::info;
use url::Url;

/// The calendar feed actor that processes messages
pub struct CalendarFeedActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    command_rx: mpsc::Receiver<CalendarFeedCommand>,
}

/// Commands that can be sent to the calendar feed actor
pub enum CalendarFeedCommand {
    GetEvents(mpsc::Sender<AppResult<Vec<EventItem>>>),
    Shutdown,
}

/// Handle for communicating with the calendar feed actor
#[derive(Clone)]
pub struct CalendarFeedActorHandle {
    command_tx: mpsc::Sender<CalendarFeedCommand>,
}

impl CalendarFeedActorHandle {
    /// Fetch and normalize the full event feed
    pub async fn get_events(&self) -> AppResult<Vec<EventItem>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarFeedCommand::GetEvents(response_tx))
            .await
            .map_err(|e| network_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| network_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(CalendarFeedCommand::Shutdown).await;
        Ok(())
    }
}

impl CalendarFeedActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, CalendarFeedActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            client: Client::new(),
            command_rx,
        };

        let handle = CalendarFeedActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Calendar feed actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarFeedCommand::GetEvents(response_tx) => {
                    let result =
                        Self::fetch_events(Arc::clone(&self.config), self.client.clone()).await;
                    let _ = response_tx.send(result).await;
                }
                CalendarFeedCommand::Shutdown => {
                    info!("Calendar feed actor shutting down");
                    break;
                }
            }
        }

        info!("Calendar feed actor shut down");
    }

    /// Fetch the raw feed from the calendar endpoint and normalize it.
    ///
    /// The whole fetch succeeds or fails as a unit: transport problems and
    /// an undecodable body surface as `Network`, an error envelope as `Api`.
    /// Individual malformed entries are discarded during normalization and
    /// never fail the fetch.
    pub async fn fetch_events(
        config: Arc<RwLock<Config>>,
        client: Client,
    ) -> AppResult<Vec<EventItem>> {
        let (api_key, calendar_id, timezone, timeout_secs) = {
            let config_read = config.read().await;
            (
                config_read.google_api_key.clone(),
                config_read.google_calendar_id.clone(),
                config_read.tz()?,
                config_read.fetch_timeout_secs,
            )
        };

        // Build URL with query parameters
        let url_str = format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            calendar_id
        );

        let mut url = Url::parse(&url_str)
            .map_err(|e| network_error(&format!("Failed to build events URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("key", &api_key)
            .append_pair("orderBy", "startTime")
            .append_pair("singleEvents", "true");

        // Make API request
        let response = client
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| network_error(&format!("Failed to fetch events: {}", e)))?;

        let envelope: EventsResponse = response
            .json()
            .await
            .map_err(|e| network_error(&format!("Failed to decode events response: {}", e)))?;

        if let Some(error) = envelope.error {
            let message = error
                .message
                .unwrap_or_else(|| "Failed to load events from the calendar".to_string());
            return Err(api_error(&message));
        }

        Ok(normalize_entries(&envelope.items, timezone))
    }
}
