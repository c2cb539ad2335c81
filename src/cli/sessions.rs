//! CLI handler for listing sessions.

use anyhow::Result;

use crate::config::Config;
use crate::sessions::SessionsClient;

/// Print one line per session: id, start time, transcription flag, name.
pub async fn handle_sessions_command(config: &Config) -> Result<()> {
    let client = SessionsClient::new(config);
    let sessions = client.list_sessions().await?;

    for session in &sessions {
        println!(
            "{}  {}  transcription={}  {}",
            session.id,
            session.actual_start.to_rfc3339(),
            session.transcription_active,
            session.name
        );
    }

    Ok(())
}
