//! API data models

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Health check envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthInfo {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "f1-highlighter".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error body returned for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, video_id: Option<String>) -> Self {
        Self {
            error: error.into(),
            video_id,
        }
    }
}
