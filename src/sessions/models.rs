//! Response shapes for the sessions API.
//!
//! The API returns many more fields than we consume; unknown fields are
//! ignored during decode. Field names are camelCase on the wire.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A remote meeting instance with scheduling and transcription metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub actual_start: DateTime<Utc>,
    pub transcription_active: bool,
    pub session_link: String,
}

/// One utterance of a transcript in a single language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptContent {
    pub language: String,
    pub text: String,
}

/// One timestamped utterance attributed to a participant.
///
/// `content` holds the same utterance in one or more languages
/// (original plus translations), in server order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptElement {
    pub participant_id: String,
    pub source_timestamp: DateTime<Utc>,
    pub content: Vec<TranscriptContent>,
}

/// Identity details shared by registered users and guests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// A session attendee, either a registered user or an anonymous guest.
///
/// Real responses populate exactly one of the two records, but the decode
/// tolerates either being absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub user: Option<PersonRecord>,
    #[serde(default)]
    pub guest: Option<PersonRecord>,
}

impl Participant {
    /// Concatenated first and last name of whichever identity record is
    /// populated, preferring the user record.
    ///
    /// A participant with neither record is a data-integrity violation
    /// and fails the run.
    pub fn display_name(&self) -> Result<String> {
        let record = self
            .user
            .as_ref()
            .or(self.guest.as_ref())
            .context("Participant has neither a user nor a guest record")?;

        Ok(format!("{}{}", record.first_name, record.last_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(first: &str, last: &str) -> PersonRecord {
        PersonRecord {
            id: "id".to_string(),
            email: "person@example.com".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_session_array_decodes_in_server_order() {
        let body = json!([
            {
                "id": "S2",
                "name": "Weekly sync",
                "actualStart": "2024-05-09T18:00:00.000Z",
                "transcriptionActive": true,
                "sessionLink": "https://meet.example.com/S2",
                "lifecycle": "ENDED"
            },
            {
                "id": "S1",
                "name": "Retro",
                "actualStart": "2024-05-02T10:00:00.000Z",
                "transcriptionActive": false,
                "sessionLink": "https://meet.example.com/S1"
            }
        ])
        .to_string();

        let sessions: Vec<Session> = serde_json::from_str(&body).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, "S2");
        assert_eq!(sessions[0].name, "Weekly sync");
        assert!(sessions[0].transcription_active);
        assert_eq!(sessions[1].id, "S1");
        assert_eq!(sessions[1].session_link, "https://meet.example.com/S1");
    }

    #[test]
    fn test_session_missing_required_field_fails_decode() {
        let body = json!([{ "id": "S1", "name": "Retro" }]).to_string();
        let result: std::result::Result<Vec<Session>, _> = serde_json::from_str(&body);
        assert!(result.is_err());
    }

    #[test]
    fn test_transcript_element_decodes_multi_language_content() {
        let body = json!({
            "participantId": "P1",
            "sourceTimestamp": "2024-05-09T18:04:18.826Z",
            "sessionId": "S1",
            "content": [
                { "language": "nl", "text": "Hallo", "isOriginal": true },
                { "language": "en", "text": "Hello" }
            ]
        })
        .to_string();

        let element: TranscriptElement = serde_json::from_str(&body).unwrap();

        assert_eq!(element.participant_id, "P1");
        assert_eq!(element.content.len(), 2);
        assert_eq!(element.content[0].language, "nl");
        assert_eq!(element.content[1].text, "Hello");
    }

    #[test]
    fn test_display_name_prefers_user_over_guest() {
        let participant = Participant {
            user: Some(person("Jan", "Jansen")),
            guest: Some(person("Gast", "Gebruiker")),
        };

        assert_eq!(participant.display_name().unwrap(), "JanJansen");
    }

    #[test]
    fn test_display_name_falls_back_to_guest() {
        let participant = Participant {
            user: None,
            guest: Some(person("Gast", "Gebruiker")),
        };

        assert_eq!(participant.display_name().unwrap(), "GastGebruiker");
    }

    #[test]
    fn test_display_name_fails_when_no_identity_present() {
        let participant = Participant::default();
        assert!(participant.display_name().is_err());
    }

    #[test]
    fn test_participant_decodes_with_absent_records() {
        let participant: Participant =
            serde_json::from_str(&json!({ "muted": false }).to_string()).unwrap();
        assert!(participant.user.is_none());
        assert!(participant.guest.is_none());
    }
}
