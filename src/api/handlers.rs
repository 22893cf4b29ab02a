//! API request handlers

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::highlights::{HighlightExtractor, HighlightResponse};
use crate::transcript::{
    FetchedTranscript, TranscriptError, TranscriptServiceClient, TranscriptSource,
    TranscriptTrack,
};

/// Fetch a transcript and run the extraction pipeline over it
///
/// Acquisition failures propagate as [`TranscriptError`] for the server to
/// map to HTTP status codes; extraction itself always yields a well-formed
/// response, falling back to the structured error record on internal
/// failure.
pub async fn get_highlights(
    transcripts: &Arc<TranscriptServiceClient>,
    extractor: &Arc<HighlightExtractor>,
    config: &Config,
    video_id: &str,
) -> Result<HighlightResponse, TranscriptError> {
    let fetched = transcripts
        .fetch(video_id, &config.transcript.languages)
        .await?;

    info!(
        "🎬 Extracting highlights for {} ({} entries)",
        video_id,
        fetched.transcript.len()
    );

    Ok(extractor.extract(video_id, &fetched.transcript))
}

/// Fetch the raw transcript for a video
pub async fn get_transcript(
    transcripts: &Arc<TranscriptServiceClient>,
    config: &Config,
    video_id: &str,
) -> Result<FetchedTranscript, TranscriptError> {
    transcripts
        .fetch(video_id, &config.transcript.languages)
        .await
}

/// List transcript tracks available for a video
pub async fn list_transcripts(
    transcripts: &Arc<TranscriptServiceClient>,
    video_id: &str,
) -> Result<Vec<TranscriptTrack>, TranscriptError> {
    transcripts.list_available(video_id).await
}

/// User-facing message for an acquisition failure
pub fn user_message(err: &TranscriptError) -> &'static str {
    if err.is_not_found() {
        "Transcript not available"
    } else if err.is_retryable() {
        "Transcript service temporarily unavailable, retry later"
    } else {
        "Transcript service error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            user_message(&TranscriptError::NotAvailable),
            "Transcript not available"
        );
        assert_eq!(
            user_message(&TranscriptError::Disabled),
            "Transcript not available"
        );
        assert_eq!(
            user_message(&TranscriptError::Throttled),
            "Transcript service temporarily unavailable, retry later"
        );
        assert_eq!(
            user_message(&TranscriptError::Upstream("500".to_string())),
            "Transcript service error"
        );
    }
}
