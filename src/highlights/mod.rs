//! Highlight extraction pipeline
//!
//! Turns a timestamped commentary transcript into a deduplicated,
//! time-ordered list of highlight events. Single pass, synchronous, no I/O:
//! classification over the static trigger catalog, driver recognition,
//! 30-second-bucket deduplication, importance scoring and final timeline
//! assembly with a guaranteed race-start event.

pub mod catalog;
pub mod classifier;
pub mod dedup;
pub mod drivers;
pub mod scoring;
pub mod timeline;

// Re-export main types
pub use catalog::{EventCategory, HighlightCatalog, TriggerEntry};
pub use classifier::{CandidateEvent, EventClassifier};
pub use drivers::DriverRecognizer;

use crate::transcript::TranscriptEntry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// A single highlight event in the final timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightEvent {
    /// Position in the broadcast as "M:SS"
    pub timestamp: String,
    pub category: EventCategory,
    pub title: String,
    pub description: String,
    /// Drivers involved, first-mentioned order, no duplicates
    pub participants: Vec<String>,
    /// Salience score, always within 1..=10
    pub importance: u8,
}

/// Extraction result returned to callers
///
/// Always well-formed: either a populated timeline, or an error message with
/// an empty event list. Never a partial timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResponse {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub events: Vec<HighlightEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Highlight extractor holding the immutable catalogs
///
/// Construction compiles the driver patterns once; extraction itself is a
/// pure function of its input and is safe to call from concurrent tasks.
#[derive(Debug, Clone)]
pub struct HighlightExtractor {
    catalog: HighlightCatalog,
    drivers: DriverRecognizer,
}

impl HighlightExtractor {
    /// Create an extractor with the default catalogs
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: HighlightCatalog::new(),
            drivers: DriverRecognizer::new()?,
        })
    }

    /// Run the full pipeline over a fetched transcript
    ///
    /// Internal failures are caught here and converted into the structured
    /// error result; partial timelines are discarded, not returned.
    pub fn extract(&self, video_id: &str, entries: &[TranscriptEntry]) -> HighlightResponse {
        match self.run_pipeline(entries) {
            Ok(events) => {
                info!(
                    "🏁 Extracted {} highlight events from {} transcript entries for {}",
                    events.len(),
                    entries.len(),
                    video_id
                );
                HighlightResponse {
                    video_id: video_id.to_string(),
                    events,
                    error: None,
                }
            }
            Err(e) => {
                error!("Highlight extraction failed for {}: {}", video_id, e);
                HighlightResponse {
                    video_id: video_id.to_string(),
                    events: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn run_pipeline(&self, entries: &[TranscriptEntry]) -> Result<Vec<HighlightEvent>> {
        let classifier = EventClassifier::new(&self.catalog, &self.drivers);
        let candidates = classifier.classify(entries);
        let deduped = dedup::dedupe_candidates(candidates);
        Ok(timeline::assemble_timeline(deduped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_returns_video_id() {
        let extractor = HighlightExtractor::new().unwrap();
        let result = extractor.extract("abc123", &[]);

        assert_eq!(result.video_id, "abc123");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_empty_transcript_yields_synthesized_start() {
        let extractor = HighlightExtractor::new().unwrap();
        let result = extractor.extract("abc123", &[]);

        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].category, EventCategory::RaceStart);
        assert_eq!(result.events[0].timestamp, "0:00");
    }

    #[test]
    fn test_error_response_serializes_with_empty_events() {
        let response = HighlightResponse {
            video_id: "abc123".to_string(),
            events: Vec::new(),
            error: Some("boom".to_string()),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["videoId"], "abc123");
        assert_eq!(value["error"], "boom");
        assert_eq!(value["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_success_response_omits_error_field() {
        let extractor = HighlightExtractor::new().unwrap();
        let result = extractor.extract("abc123", &[]);

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("error").is_none());
    }
}
