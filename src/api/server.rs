//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::Config;
use crate::highlights::HighlightExtractor;
use crate::transcript::{TranscriptError, TranscriptServiceClient};
use super::{handlers, models::{ErrorBody, HealthInfo}};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<HighlightExtractor>,
    pub transcripts: Arc<TranscriptServiceClient>,
    pub config: Arc<Config>,
}

/// Configure and start the HTTP server
pub async fn start_http_server(
    extractor: Arc<HighlightExtractor>,
    transcripts: Arc<TranscriptServiceClient>,
    config: Arc<Config>,
    port: u16,
) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    let enable_cors = config.api.enable_cors;
    let app_state = AppState {
        extractor,
        transcripts,
        config,
    };

    // Build the application with routes
    let mut app = Router::new()
        // Health check endpoints (both paths for compatibility)
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        // Highlight extraction
        .route("/api/highlights/:video_id", get(highlights_handler))
        // Transcript passthrough
        .route("/api/transcript/:video_id", get(transcript_handler))
        .route("/api/transcripts/:video_id", get(list_transcripts_handler))
        // Add state and middleware
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        // Configure CORS to allow browser access
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("🌐 API server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthInfo::healthy()))
}

/// Highlight extraction handler
async fn highlights_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match handlers::get_highlights(&state.transcripts, &state.extractor, &state.config, &video_id)
        .await
    {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => transcript_error_response(&video_id, &e),
    }
}

/// Raw transcript handler
async fn transcript_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match handlers::get_transcript(&state.transcripts, &state.config, &video_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => transcript_error_response(&video_id, &e),
    }
}

/// Available transcript tracks handler
async fn list_transcripts_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match handlers::list_transcripts(&state.transcripts, &video_id).await {
        Ok(tracks) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "videoId": video_id,
                "available_transcripts": tracks,
            })),
        )
            .into_response(),
        Err(e) => transcript_error_response(&video_id, &e),
    }
}

/// Map acquisition failures to HTTP responses
fn transcript_error_response(video_id: &str, err: &TranscriptError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_retryable() {
        StatusCode::TOO_MANY_REQUESTS
    } else {
        StatusCode::BAD_GATEWAY
    };

    let body = ErrorBody::new(handlers::user_message(err), Some(video_id.to_string()));
    (status, Json(body)).into_response()
}
