use crate::error::{config_error, env_error, AppResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use toml;

/// Default lead time for event reminders, in minutes before the start
pub const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;

/// Default network timeout for calendar fetches, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Main configuration structure for the app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API key
    pub google_api_key: String,
    /// Google Calendar ID to fetch events from
    pub google_calendar_id: String,
    /// Redis connection URL for the persistence store
    pub redis_url: String,
    /// Timezone used for all displayed dates and times
    pub timezone: String,
    /// How many minutes before an event its reminder fires
    pub reminder_lead_minutes: i64,
    /// Network timeout for the calendar fetch
    pub fetch_timeout_secs: u64,
}

/// Optional overrides loaded from config/app.toml
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    timezone: Option<String>,
    reminder_lead_minutes: Option<i64>,
    fetch_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_api_key =
            env::var("GOOGLE_API_KEY").map_err(|_| env_error("GOOGLE_API_KEY"))?;
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").map_err(|_| env_error("GOOGLE_CALENDAR_ID"))?;

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| String::from("redis://127.0.0.1:6379"));

        // Default timezone
        let mut timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        let mut reminder_lead_minutes = match env::var("REMINDER_LEAD_MINUTES") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid REMINDER_LEAD_MINUTES format"))?,
            Err(_) => DEFAULT_REMINDER_LEAD_MINUTES,
        };

        let mut fetch_timeout_secs = DEFAULT_FETCH_TIMEOUT_SECS;

        // Merge overrides from file if it exists
        if let Ok(content) = fs::read_to_string("config/app.toml") {
            if let Ok(overrides) = toml::from_str::<FileOverrides>(&content) {
                if let Some(tz) = overrides.timezone {
                    timezone = tz;
                }
                if let Some(lead) = overrides.reminder_lead_minutes {
                    reminder_lead_minutes = lead;
                }
                if let Some(timeout) = overrides.fetch_timeout_secs {
                    fetch_timeout_secs = timeout;
                }
            }
        }

        Ok(Config {
            google_api_key,
            google_calendar_id,
            redis_url,
            timezone,
            reminder_lead_minutes,
            fetch_timeout_secs,
        })
    }

    /// Parse the configured timezone
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Invalid timezone: {}", self.timezone)))
    }
}
