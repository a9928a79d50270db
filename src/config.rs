use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub openai: OpenAiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API base URL, no trailing slash (override for OpenAI-compatible proxies)
    pub base_url: String,

    /// Speech-to-text model for /v1/audio/transcriptions
    pub transcribe_model: String,

    /// Chat model for /v1/chat/completions
    pub chat_model: String,

    /// Text-to-speech model for /v1/audio/speech
    pub speech_model: String,

    /// Text-to-speech voice (fixed configuration, not user-selectable)
    pub voice: String,

    /// Per-request timeout; a hung remote call fails the turn at this
    /// deadline instead of blocking the interaction forever
    pub request_timeout_secs: u64,

    /// Optional default API key; the per-request `x-api-key` header wins
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory holding per-turn audio files (one subdirectory per turn)
    pub turns_path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            transcribe_model: "whisper-1".to_string(),
            chat_model: "gpt-3.5-turbo-1106".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "nova".to_string(),
            request_timeout_secs: 60,
            api_key: None,
        }
    }
}
