/// HTTP client for the sidecar transcript service
use super::{FetchedTranscript, TranscriptError, TranscriptSource, TranscriptTrack};
use crate::config::TranscriptServiceConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Error body returned by the transcript service
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    detail: String,
}

/// Listing response from the transcript service
#[derive(Debug, Deserialize)]
struct TrackListBody {
    available_transcripts: Vec<TranscriptTrack>,
}

/// Client for the transcript service
#[derive(Debug, Clone)]
pub struct TranscriptServiceClient {
    client: Client,
    base_url: String,
    /// Courtesy delay before each request, to respect upstream rate limits
    fetch_delay: Duration,
}

impl TranscriptServiceClient {
    /// Create a new client from configuration
    pub fn new(config: &TranscriptServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("f1-highlighter/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fetch_delay: Duration::from_millis(config.fetch_delay_ms),
        }
    }

    /// List transcript tracks available for a video
    pub async fn list_available(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptTrack>, TranscriptError> {
        let url = format!("{}/transcripts/{}", self.base_url, video_id);
        debug!("Listing transcript tracks: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response).await);
        }

        let body: TrackListBody = response
            .json()
            .await
            .map_err(|e| TranscriptError::Upstream(e.to_string()))?;

        Ok(body.available_transcripts)
    }
}

#[async_trait]
impl TranscriptSource for TranscriptServiceClient {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, TranscriptError> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        let url = format!("{}/transcript/{}", self.base_url, video_id);
        info!("📡 Fetching transcript for video: {}", video_id);

        let response = self
            .client
            .get(&url)
            .query(&[("languages", languages.join(","))])
            .send()
            .await?;

        if !response.status().is_success() {
            let err = service_error(response).await;
            warn!("Transcript fetch failed for {}: {}", video_id, err);
            return Err(err);
        }

        let fetched: FetchedTranscript = response
            .json()
            .await
            .map_err(|e| TranscriptError::Upstream(e.to_string()))?;

        info!(
            "📜 Fetched {} transcript entries ({}) for {}",
            fetched.transcript.len(),
            fetched.language,
            video_id
        );

        Ok(fetched)
    }
}

/// Map a non-success service response to the typed error taxonomy
async fn service_error(response: reqwest::Response) -> TranscriptError {
    let status = response.status();
    let detail = response
        .json::<ServiceErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_default();

    match status {
        StatusCode::NOT_FOUND => classify_not_found(&detail),
        StatusCode::TOO_MANY_REQUESTS => TranscriptError::Throttled,
        _ => TranscriptError::Upstream(format!("{} {}", status.as_u16(), detail)),
    }
}

/// Split the service's 404 detail into the specific unavailability kinds
fn classify_not_found(detail: &str) -> TranscriptError {
    let detail = detail.to_lowercase();
    if detail.contains("disabled") {
        TranscriptError::Disabled
    } else if detail.contains("video unavailable") {
        TranscriptError::VideoUnavailable
    } else {
        TranscriptError::NotAvailable
    }
}
