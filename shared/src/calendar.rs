//! Google Calendar client using the REST API with refresh-token auth.

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{Config, Error, Result};

/// OAuth token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Event fields read back after a patch.
#[derive(Debug, Deserialize)]
pub struct PatchedEvent {
    #[serde(rename = "htmlLink")]
    pub html_link: Option<String>,
}

/// Patch body moving an event's boundaries.
#[derive(Debug, Serialize)]
struct EventTimePatch<'a> {
    start: EventDateTime<'a>,
    end: EventDateTime<'a>,
}

#[derive(Debug, Serialize)]
struct EventDateTime<'a> {
    #[serde(rename = "dateTime")]
    date_time: &'a str,
}

/// Calendar client authorized by a long-lived refresh token.
///
/// The access token is exchanged lazily on the first remote call and cached
/// for the lifetime of the client, so every call in one request batch shares
/// the same authorized session. Credentials are not checked locally; bad
/// credentials only surface when a remote call executes.
pub struct CalendarClient {
    http: reqwest::Client,
    token_url: String,
    api_base: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    access_token: OnceCell<String>,
}

impl CalendarClient {
    /// Build a client from the service configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_url: config.google_token_url.clone(),
            api_base: config.google_api_base.trim_end_matches('/').to_string(),
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            refresh_token: config.google_refresh_token.clone(),
            access_token: OnceCell::new(),
        }
    }

    /// Exchange the refresh token for an access token.
    async fn refresh_access_token(&self) -> Result<String> {
        let params = [
            ("refresh_token", self.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Calendar(format!("Token refresh failed: {}", error_text)));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn access_token(&self) -> Result<&str> {
        self.access_token
            .get_or_try_init(|| self.refresh_access_token())
            .await
            .map(String::as_str)
    }

    /// Calendar ids are commonly email addresses; encode both path segments.
    fn event_url(&self, calendar_id: &str, event_id: &str) -> String {
        format!(
            "{}/calendars/{}/events/{}",
            self.api_base,
            urlencoding::encode(calendar_id),
            urlencoding::encode(event_id)
        )
    }

    /// Delete an event from the calendar.
    pub async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()> {
        let access_token = self.access_token().await?;

        debug!("Deleting event {} from calendar {}", event_id, calendar_id);

        let response = self
            .http
            .delete(self.event_url(calendar_id, event_id))
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Calendar(format!("Event delete failed: {}", error_text)));
        }

        Ok(())
    }

    /// Move an event's start and end.
    ///
    /// Timestamps are passed to the provider verbatim; it is the sole
    /// validator of their format and ordering.
    pub async fn patch_event_times(
        &self,
        calendar_id: &str,
        event_id: &str,
        start: &str,
        end: &str,
    ) -> Result<PatchedEvent> {
        let access_token = self.access_token().await?;

        debug!("Rescheduling event {} on calendar {}", event_id, calendar_id);

        let patch = EventTimePatch {
            start: EventDateTime { date_time: start },
            end: EventDateTime { date_time: end },
        };

        let response = self
            .http
            .patch(self.event_url(calendar_id, event_id))
            .bearer_auth(access_token)
            .json(&patch)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Calendar(format!("Event patch failed: {}", error_text)));
        }

        let event: PatchedEvent = response.json().await?;
        Ok(event)
    }
}
