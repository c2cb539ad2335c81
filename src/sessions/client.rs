//! HTTP client for the sessions API.
//!
//! Three read-only operations: list sessions, fetch a session's transcript,
//! fetch a participant. All requests are plain GETs carrying the API key
//! header configured on the underlying client; any non-success status is a
//! hard failure with no retry.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use super::models::{Participant, Session, TranscriptElement};
use crate::config::Config;

/// Client for the sessions API.
pub struct SessionsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SessionsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: config.client.clone(),
            base_url: config.api_url.clone(),
        }
    }

    /// List all sessions, preserving server order.
    pub async fn list_sessions(&self) -> Result<Vec<Session>> {
        let url = format!("{}/api/sessions/", self.base_url);
        let sessions: Vec<Session> = self.get_json(&url, "session list").await?;

        info!("Fetched {} sessions", sessions.len());
        Ok(sessions)
    }

    /// Fetch the transcript of one session, in server (chronological) order.
    pub async fn fetch_transcript(&self, session_id: &str) -> Result<Vec<TranscriptElement>> {
        let url = format!("{}/api/sessions/{}/transcripts", self.base_url, session_id);
        let elements: Vec<TranscriptElement> = self.get_json(&url, "transcript").await?;

        info!(
            "Fetched {} transcript elements for session {}",
            elements.len(),
            session_id
        );
        Ok(elements)
    }

    /// Fetch one participant record by participant id.
    ///
    /// The upstream API serves participant records from the session path,
    /// with the participant id in the session slot.
    pub async fn fetch_participant(&self, participant_id: &str) -> Result<Participant> {
        let url = format!(
            "{}/api/sessions/{}/participants",
            self.base_url, participant_id
        );
        self.get_json(&url, "participant").await
    }

    /// GET a URL and decode the JSON body, failing on any non-success status.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {} from {}", what, url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", what))?;

        if !status.is_success() {
            error!("{} request failed with status {}: {}", what, status, body);
            return Err(anyhow::anyhow!(
                "{} request failed with status {}: {}",
                what,
                status,
                body
            ));
        }

        serde_json::from_str(&body).with_context(|| format!("Failed to parse {} response", what))
    }
}
