/// F1 Race Highlighter - Rust Implementation
///
/// Keyword-driven highlight extraction for Formula 1 race commentary.
/// Turns timestamped broadcast transcripts into deduplicated, time-ordered
/// highlight timelines.

pub mod api;
pub mod config;
pub mod highlights;
pub mod transcript;

// Re-export main types for easy access
pub use crate::api::ApiServer;
pub use crate::config::Config;
pub use crate::highlights::{
    EventCategory, HighlightCatalog, HighlightEvent, HighlightExtractor, HighlightResponse,
};
pub use crate::transcript::{
    FetchedTranscript, TranscriptEntry, TranscriptError, TranscriptServiceClient,
    TranscriptSource,
};
