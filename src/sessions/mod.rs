//! Typed models and HTTP client for the remote sessions API.

pub mod client;
pub mod models;

pub use client::SessionsClient;
pub use models::{Participant, PersonRecord, Session, TranscriptContent, TranscriptElement};
