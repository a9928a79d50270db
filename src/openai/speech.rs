use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, error, info};

use super::{require_api_key, Synthesizer};
use crate::config::OpenAiConfig;

#[derive(serde::Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

/// Text-to-speech via the OpenAI speech endpoint.
///
/// The synthesized audio is written to the caller's output path with
/// overwrite semantics, so the file's contents only ever reflect the
/// current turn's reply.
pub struct OpenAiSynthesizer {
    client: reqwest::Client,
    config: OpenAiConfig,
    api_key: String,
}

impl OpenAiSynthesizer {
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
impl Synthesizer for OpenAiSynthesizer {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()> {
        debug!("Requesting speech synthesis ({} chars)", text.len());

        let request = SpeechRequest {
            model: &self.config.speech_model,
            voice: &self.config.voice,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/v1/audio/speech", self.config.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Speech synthesis request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Speech API error {}: {}", status, body);
            bail!("Speech API error {status}: {body}");
        }

        let audio = response
            .bytes()
            .await
            .context("Failed to download synthesized audio")?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create turn directory {}", parent.display()))?;
        }

        std::fs::write(output_path, &audio)
            .with_context(|| format!("Failed to write reply audio {}", output_path.display()))?;

        info!(
            "Reply audio written: {} ({} bytes)",
            output_path.display(),
            audio.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_request_carries_fixed_voice_and_model() {
        let config = crate::config::OpenAiConfig::default();
        let request = SpeechRequest {
            model: &config.speech_model,
            voice: &config.voice,
            input: "Hi there",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "tts-1");
        assert_eq!(json["voice"], "nova");
        assert_eq!(json["input"], "Hi there");
    }

    #[test]
    fn synthesizer_rejects_empty_api_key() {
        let result = OpenAiSynthesizer::new(
            reqwest::Client::new(),
            crate::config::OpenAiConfig::default(),
            String::new(),
        );
        assert!(result.is_err());
    }
}
