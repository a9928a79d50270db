use super::state::AppState;
use crate::openai::{OpenAiResponder, OpenAiSynthesizer, OpenAiTranscriber};
use crate::render;
use crate::turn::{SessionCredential, TurnContext, TurnPipeline};
use anyhow::{Context, Result};
use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json},
};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub turn_id: String,

    /// Text recognized from the uploaded recording
    pub transcript: String,

    /// Reply text generated from the transcript
    pub response_text: String,

    /// Rendered "Transcribed Text" card (HTML fragment)
    pub transcript_card: String,

    /// Rendered "AI Response" card (HTML fragment)
    pub response_card: String,

    /// Inline auto-playing audio element (HTML fragment)
    pub audio_player: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// The single-page browser UI
pub async fn index() -> Html<&'static str> {
    Html(render::index_page())
}

/// POST /turns
/// Run one full interaction turn: persist the uploaded recording,
/// transcribe it, generate a reply, synthesize the reply, render output.
pub async fn run_turn(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> impl IntoResponse {
    // Without a credential nothing downstream runs: no clients are even
    // constructed, so no remote call can be attempted.
    let api_key = headers.get("x-api-key").and_then(|v| v.to_str().ok());
    let credential =
        match SessionCredential::resolve(api_key, state.config.openai.api_key.as_deref()) {
            Some(credential) => credential,
            None => {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        error: "Missing API key".to_string(),
                    }),
                )
                    .into_response();
            }
        };

    // Same for the recording: an absent or empty upload ends the turn here.
    let (recording, extension) = match read_recording(multipart).await {
        Ok(Some((bytes, extension))) if !bytes.is_empty() => (bytes, extension),
        Ok(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio was recorded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            error!("Malformed turn upload: {:#}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Malformed upload: {e:#}"),
                }),
            )
                .into_response();
        }
    };

    let ctx = TurnContext::new(&state.config.storage.turns_path);
    info!(
        "Received recording for {}: {} bytes (.{})",
        ctx.turn_id(),
        recording.len(),
        extension
    );

    let pipeline = match build_pipeline(&state, &credential) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to build turn pipeline: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to build turn pipeline: {e:#}"),
                }),
            )
                .into_response();
        }
    };

    let outcome = match pipeline.run(&ctx, &recording, &extension).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Turn {} failed: {:#}", ctx.turn_id(), e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Turn failed: {e:#}"),
                }),
            )
                .into_response();
        }
    };

    let audio_player = match render::inline_audio_player(&outcome.reply_audio_path) {
        Ok(html) => html,
        Err(e) => {
            error!("Failed to render reply audio: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to render reply audio: {e:#}"),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(TurnResponse {
            turn_id: outcome.turn_id.clone(),
            transcript_card: render::text_card(&outcome.transcript, "Transcribed Text"),
            response_card: render::text_card(&outcome.response_text, "AI Response"),
            audio_player,
            transcript: outcome.transcript,
            response_text: outcome.response_text,
        }),
    )
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ============================================================================
// Helpers
// ============================================================================

/// Wire up the three remote clients for this turn's credential.
fn build_pipeline(state: &AppState, credential: &SessionCredential) -> Result<TurnPipeline> {
    let openai = state.config.openai.clone();
    let key = credential.as_str().to_string();

    Ok(TurnPipeline::new(
        Box::new(OpenAiTranscriber::new(
            state.http.clone(),
            openai.clone(),
            key.clone(),
        )?),
        Box::new(OpenAiResponder::new(
            state.http.clone(),
            openai.clone(),
            key.clone(),
        )?),
        Box::new(OpenAiSynthesizer::new(state.http.clone(), openai, key)?),
    ))
}

/// Pull the `recording` part out of the multipart upload.
///
/// Returns the raw bytes plus a file extension derived from the uploaded
/// filename (the browser recorder names its blob `capture.webm`).
async fn read_recording(mut multipart: Multipart) -> Result<Option<(Vec<u8>, String)>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .context("Failed to read multipart field")?
    {
        if field.name() != Some("recording") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .unwrap_or("webm")
            .to_string();

        let bytes = field
            .bytes()
            .await
            .context("Failed to read recording bytes")?;

        return Ok(Some((bytes.to_vec(), extension)));
    }

    Ok(None)
}
