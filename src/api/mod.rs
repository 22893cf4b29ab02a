//! API module for the F1 race highlighter
//!
//! Provides the REST endpoints for highlight extraction and transcript
//! passthrough.

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::highlights::HighlightExtractor;
use crate::transcript::TranscriptServiceClient;

pub mod handlers;
pub mod models;
pub mod server;

/// API server for handling REST requests
#[derive(Debug)]
pub struct ApiServer {
    extractor: Arc<HighlightExtractor>,
    transcripts: Arc<TranscriptServiceClient>,
    config: Arc<Config>,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(
        extractor: Arc<HighlightExtractor>,
        transcripts: Arc<TranscriptServiceClient>,
        config: Arc<Config>,
        port: u16,
    ) -> Self {
        Self {
            extractor,
            transcripts,
            config,
            port,
        }
    }

    /// Start the API server in the background
    pub fn start_background(self) -> JoinHandle<Result<()>> {
        tokio::spawn(async move { self.start().await })
    }

    /// Start the API server
    pub async fn start(self) -> Result<()> {
        info!("🚀 Starting API server on port {}", self.port);

        server::start_http_server(self.extractor, self.transcripts, self.config, self.port).await
    }
}
