//! CLI handler for the default action: print the transcript of the first
//! session returned by the API.

use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::sessions::{Session, SessionsClient};
use crate::transcript::format_transcript;

/// Fetch and print the transcript of the first available session.
///
/// With `only_transcribed` set, sessions without transcription active are
/// skipped when picking the session.
pub async fn handle_transcript_command(config: &Config, only_transcribed: bool) -> Result<()> {
    let client = SessionsClient::new(config);
    let sessions = client.list_sessions().await?;

    let session = pick_session(&sessions, only_transcribed);
    let Some(session) = session else {
        bail!("No sessions available");
    };

    info!("Fetching transcript of session: {}", session.name);

    let elements = client.fetch_transcript(&session.id).await?;
    let formatted = format_transcript(&client, &config.language, &elements).await?;

    println!("{}", formatted);

    Ok(())
}

fn pick_session(sessions: &[Session], only_transcribed: bool) -> Option<&Session> {
    sessions
        .iter()
        .find(|session| !only_transcribed || session.transcription_active)
}
