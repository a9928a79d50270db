//! Clients for the three remote OpenAI calls a turn makes:
//! speech-to-text, chat completion, and text-to-speech.
//!
//! Each call is behind a trait so the turn pipeline can be exercised
//! without network access. No client retries: a remote failure (bad
//! credential, unsupported audio, network, quota) aborts the turn and
//! propagates to the caller.

mod chat;
mod speech;
mod transcribe;

pub use chat::OpenAiResponder;
pub use speech::OpenAiSynthesizer;
pub use transcribe::OpenAiTranscriber;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::config::OpenAiConfig;

/// Converts a recorded audio file into a text transcript.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}

/// Produces a reply to a transcript, treated as a one-shot prompt.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, transcript: &str) -> Result<String>;
}

/// Renders reply text as speech, written to the given file path.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()>;
}

/// Build the shared HTTP client with the configured per-request timeout.
pub fn build_http_client(config: &OpenAiConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Shared constructor guard: no client is created without a credential,
/// so an empty session key can never reach the network.
fn require_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        bail!("OpenAI API key required");
    }
    Ok(())
}
