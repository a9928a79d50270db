use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{require_api_key, Responder};
use crate::config::OpenAiConfig;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Reply generation via the OpenAI chat-completions endpoint.
///
/// Each turn is independent: the request carries exactly one user message
/// (the transcript) and no conversation history.
pub struct OpenAiResponder {
    client: reqwest::Client,
    config: OpenAiConfig,
    api_key: String,
}

impl OpenAiResponder {
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
impl Responder for OpenAiResponder {
    async fn respond(&self, transcript: &str) -> Result<String> {
        debug!("Requesting chat completion ({} chars)", transcript.len());

        let request = ChatRequest {
            model: &self.config.chat_model,
            messages: vec![ChatMessage {
                role: "user",
                content: transcript,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Chat API error {}: {}", status, body);
            bail!("Chat API error {status}: {body}");
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        let reply = result
            .choices
            .into_iter()
            .next()
            .context("Chat completion returned no choices")?
            .message
            .content;

        info!("Chat completion received: {} chars", reply.len());
        Ok(reply)
    }
}
