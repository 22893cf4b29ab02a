//! Transcript acquisition for the highlight pipeline
//!
//! The extraction core consumes an already-fetched, ordered sequence of
//! transcript entries. Fetching is delegated to a sidecar transcript service
//! reached over HTTP; this module holds the wire types, the typed error
//! taxonomy and the client.

pub mod client;

pub use client::TranscriptServiceClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One timestamped fragment of spoken commentary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptEntry {
    /// Spoken text
    pub text: String,
    /// Start time in seconds from the beginning of the broadcast
    pub start: f64,
    /// Spoken duration in seconds; carried through but unused by extraction
    #[serde(default)]
    pub duration: f64,
}

impl TranscriptEntry {
    pub fn new(text: impl Into<String>, start: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration: 0.0,
        }
    }
}

/// A fetched transcript with its source metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedTranscript {
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Language code the service selected (e.g. "en")
    pub language: String,
    /// Whether the transcript was auto-generated
    pub is_generated: bool,
    /// Ordered transcript entries
    pub transcript: Vec<TranscriptEntry>,
}

/// An available transcript track reported by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTrack {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

/// Transcript acquisition failures
///
/// The extraction core never retries these; callers map them to user-facing
/// categories ("not found" vs. "temporarily unavailable").
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("no transcript available for this video")]
    NotAvailable,

    #[error("transcripts are disabled for this video")]
    Disabled,

    #[error("video is unavailable")]
    VideoUnavailable,

    #[error("transcript service is temporarily blocked upstream, retry later")]
    Throttled,

    #[error("transcript service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected transcript service response: {0}")]
    Upstream(String),
}

impl TranscriptError {
    /// True for failures surfaced to users as "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TranscriptError::NotAvailable
                | TranscriptError::Disabled
                | TranscriptError::VideoUnavailable
        )
    }

    /// True for failures worth retrying later
    pub fn is_retryable(&self) -> bool {
        matches!(self, TranscriptError::Throttled)
    }
}

/// Source of transcript data, keyed by video id and language preferences
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, TranscriptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_wire_format() {
        let json = r#"{"text": "Lights out!", "start": 13.2, "duration": 2.5}"#;
        let entry: TranscriptEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.text, "Lights out!");
        assert_eq!(entry.start, 13.2);
        assert_eq!(entry.duration, 2.5);
    }

    #[test]
    fn test_entry_duration_is_optional() {
        let json = r#"{"text": "no duration", "start": 1.0}"#;
        let entry: TranscriptEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.duration, 0.0);
    }

    #[test]
    fn test_fetched_transcript_field_names() {
        let json = r#"{
            "videoId": "kGMp1Byuwto",
            "language": "en",
            "is_generated": true,
            "transcript": [{"text": "hello", "start": 0.0, "duration": 1.0}]
        }"#;
        let fetched: FetchedTranscript = serde_json::from_str(json).unwrap();

        assert_eq!(fetched.video_id, "kGMp1Byuwto");
        assert_eq!(fetched.transcript.len(), 1);

        let round_trip = serde_json::to_value(&fetched).unwrap();
        assert!(round_trip.get("videoId").is_some());
    }

    #[test]
    fn test_error_classification() {
        assert!(TranscriptError::NotAvailable.is_not_found());
        assert!(TranscriptError::Disabled.is_not_found());
        assert!(TranscriptError::VideoUnavailable.is_not_found());
        assert!(!TranscriptError::Throttled.is_not_found());

        assert!(TranscriptError::Throttled.is_retryable());
        assert!(!TranscriptError::NotAvailable.is_retryable());
    }
}
