use f1_highlighter_rust::config::TranscriptServiceConfig;
use f1_highlighter_rust::{TranscriptError, TranscriptServiceClient, TranscriptSource};

fn unreachable_config() -> TranscriptServiceConfig {
    TranscriptServiceConfig {
        // Port 9 (discard) is not listening locally; connections fail fast
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        fetch_delay_ms: 0,
        ..TranscriptServiceConfig::default()
    }
}

#[tokio::test]
async fn unreachable_service_surfaces_transport_error() {
    let client = TranscriptServiceClient::new(&unreachable_config());
    let languages = vec!["en".to_string()];

    let err = client
        .fetch("kGMp1Byuwto", &languages)
        .await
        .expect_err("fetch should fail without a transcript service");

    assert!(matches!(err, TranscriptError::Transport(_)));
    assert!(!err.is_not_found());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unreachable_service_fails_listing_too() {
    let client = TranscriptServiceClient::new(&unreachable_config());

    let err = client
        .list_available("kGMp1Byuwto")
        .await
        .expect_err("listing should fail without a transcript service");

    assert!(matches!(err, TranscriptError::Transport(_)));
}
