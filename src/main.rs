use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use voice_tutor::{create_router, AppState, Config};

#[derive(Parser, Debug)]
#[command(name = "voice-tutor", about = "Voice-interaction front end")]
struct Args {
    /// Config file to load (without extension)
    #[arg(long, default_value = "config/voice-tutor")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    let bind = cfg.service.http.bind.clone();
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} v0.1.0", cfg.service.name);
    info!("Chat model: {}", cfg.openai.chat_model);
    info!(
        "Speech models: {} / {} (voice: {})",
        cfg.openai.transcribe_model, cfg.openai.speech_model, cfg.openai.voice
    );
    info!("Turn storage: {}", cfg.storage.turns_path);

    let state = AppState::new(cfg)?;
    let router = create_router(state);

    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server exited")?;

    Ok(())
}
