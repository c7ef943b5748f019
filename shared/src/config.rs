//! Configuration management for the webhook service.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google OAuth client id
    pub google_client_id: String,
    /// Google OAuth client secret
    pub google_client_secret: String,
    /// Long-lived refresh token for the calendar owner
    pub google_refresh_token: String,
    /// Target calendar (e.g. "primary" or an email address)
    pub google_calendar_id: String,
    /// OAuth token endpoint
    pub google_token_url: String,
    /// Calendar API base URL
    pub google_api_base: String,
    /// Optional shared secret checked against the x-vapi-secret header
    pub vapi_shared_secret: Option<String>,
    /// HTTP listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            google_client_id: require("GOOGLE_CLIENT_ID")?,
            google_client_secret: require("GOOGLE_CLIENT_SECRET")?,
            google_refresh_token: require("GOOGLE_REFRESH_TOKEN")?,
            google_calendar_id: require("GOOGLE_CALENDAR_ID")?,
            google_token_url: env::var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            google_api_base: env::var("GOOGLE_API_BASE")
                .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string()),
            vapi_shared_secret: env::var("VAPI_SHARED_SECRET").ok(),
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid PORT value: {}", raw)))?,
                Err(_) => 3000,
            },
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::Config(format!("{} not set", key)))
}
