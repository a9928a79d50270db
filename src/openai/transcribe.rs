use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, error, info};

use super::{require_api_key, Transcriber};
use crate::config::OpenAiConfig;

/// Response from the transcription API
#[derive(serde::Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Speech-to-text via the OpenAI transcriptions endpoint.
pub struct OpenAiTranscriber {
    client: reqwest::Client,
    config: OpenAiConfig,
    api_key: String,
}

impl OpenAiTranscriber {
    pub fn new(client: reqwest::Client, config: OpenAiConfig, api_key: String) -> Result<Self> {
        require_api_key(&api_key)?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let audio = std::fs::read(audio_path)
            .with_context(|| format!("Failed to read capture file {}", audio_path.display()))?;

        debug!(
            "Starting transcription: {} ({} bytes)",
            audio_path.display(),
            audio.len()
        );

        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio)
                    .file_name(file_name)
                    .mime_str(mime_for_path(audio_path))
                    .context("Invalid audio MIME type")?,
            )
            .text("model", self.config.transcribe_model.clone());

        let response = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.config.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("Transcription request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Transcription API error {}: {}", status, body);
            bail!("Transcription API error {status}: {body}");
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .context("Failed to parse transcription response")?;

        info!("Transcription complete: {} chars", result.text.len());
        Ok(result.text)
    }
}

/// MIME type for the recorded capture, from its file extension.
/// Browser recorders typically produce webm or ogg; wav comes from tests
/// and local captures.
fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("wav") => "audio/wav",
        Some("webm") => "audio/webm",
        Some("ogg") => "audio/ogg",
        Some("mp3") => "audio/mpeg",
        Some("m4a") | Some("mp4") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_covers_browser_recorder_formats() {
        assert_eq!(mime_for_path(Path::new("capture.webm")), "audio/webm");
        assert_eq!(mime_for_path(Path::new("capture.wav")), "audio/wav");
        assert_eq!(mime_for_path(Path::new("capture.ogg")), "audio/ogg");
        assert_eq!(mime_for_path(Path::new("reply.mp3")), "audio/mpeg");
    }

    #[test]
    fn mime_defaults_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("capture.bin")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("capture")), "application/octet-stream");
    }

    #[test]
    fn transcriber_rejects_empty_api_key() {
        let result = OpenAiTranscriber::new(
            reqwest::Client::new(),
            crate::config::OpenAiConfig::default(),
            String::new(),
        );
        assert!(result.is_err());
    }
}
