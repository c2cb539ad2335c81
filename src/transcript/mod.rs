//! Transcript formatting.
//!
//! Turns a sequence of transcript elements into a printable text block:
//! one block per utterance (speaker name, newline, text in the target
//! language), blocks separated by a blank line, transcript order preserved.

use anyhow::Result;
use tracing::debug;

use crate::sessions::{SessionsClient, TranscriptElement};

/// Format a transcript for printing.
///
/// Resolves each element's speaker with a sequential participant lookup;
/// a failed lookup or a participant without an identity record aborts the
/// whole pass. Content is filtered to `language` before rendering.
pub async fn format_transcript(
    client: &SessionsClient,
    language: &str,
    elements: &[TranscriptElement],
) -> Result<String> {
    let mut blocks = Vec::with_capacity(elements.len());

    for element in elements {
        let participant = client.fetch_participant(&element.participant_id).await?;
        let name = participant.display_name()?;

        debug!(
            "Rendering utterance of {} at {}",
            name, element.source_timestamp
        );
        blocks.push(render_block(&name, element, language));
    }

    Ok(blocks.join("\n\n"))
}

/// Render one utterance block: speaker name, newline, the element's content
/// entries matching `language` joined with newlines.
fn render_block(name: &str, element: &TranscriptElement, language: &str) -> String {
    let text = element
        .content
        .iter()
        .filter(|entry| entry.language == language)
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", name, text)
}
