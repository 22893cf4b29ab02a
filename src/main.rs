use anyhow::Result;
use clap::{Arg, Command};
use std::sync::Arc;
use tracing::{info, warn};

mod api;
mod config;
mod highlights;
mod transcript;

use crate::api::ApiServer;
use crate::config::Config;
use crate::highlights::HighlightExtractor;
use crate::transcript::{TranscriptServiceClient, TranscriptSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("f1_highlighter=info,warn")
        .init();

    let matches = Command::new("F1 Race Highlighter (Rust)")
        .version("0.1.0")
        .author("TigreRoll")
        .about("High-performance F1 race highlight extraction from broadcast transcripts")
        .arg(
            Arg::new("video-id")
                .short('i')
                .long("video-id")
                .value_name("ID")
                .help("Extract highlights for this video and print JSON to stdout"),
        )
        .arg(
            Arg::new("serve")
                .short('s')
                .long("serve")
                .help("Run the HTTP API server")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port for the HTTP API server (overrides config)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("verbose") {
        info!("Verbose logging enabled");
    }

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };
    let config = Arc::new(config);

    let extractor = Arc::new(HighlightExtractor::new()?);
    let transcripts = Arc::new(TranscriptServiceClient::new(&config.transcript));

    info!("🏎️  F1 Race Highlighter (Rust) starting...");
    info!("📡 Transcript service: {}", config.transcript.base_url);

    if matches.get_flag("serve") {
        let port = matches
            .get_one::<String>("port")
            .map(|p| p.parse())
            .transpose()?
            .unwrap_or(config.api.port);

        let server = ApiServer::new(extractor, transcripts, config, port);
        return server.start().await;
    }

    let Some(video_id) = matches.get_one::<String>("video-id") else {
        return Err(anyhow::anyhow!(
            "Nothing to do: pass --video-id <ID> or --serve"
        ));
    };

    let fetched = transcripts
        .fetch(video_id, &config.transcript.languages)
        .await?;
    let result = extractor.extract(video_id, &fetched.transcript);

    info!("✅ Extracted {} events", result.events.len());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
