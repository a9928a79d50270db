use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use super::context::TurnContext;
use super::outcome::TurnOutcome;
use crate::audio::persist_recording;
use crate::openai::{Responder, Synthesizer, Transcriber};

/// Drives one turn through its strictly sequential steps:
/// persist the capture, transcribe it, generate a reply, synthesize the
/// reply as audio.
///
/// Each step blocks on the previous step's output; any step's error
/// aborts the turn and propagates to the caller. No retries, no queuing.
pub struct TurnPipeline {
    transcriber: Box<dyn Transcriber>,
    responder: Box<dyn Responder>,
    synthesizer: Box<dyn Synthesizer>,
}

impl TurnPipeline {
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        responder: Box<dyn Responder>,
        synthesizer: Box<dyn Synthesizer>,
    ) -> Self {
        Self {
            transcriber,
            responder,
            synthesizer,
        }
    }

    /// Run one turn over a recorded audio buffer.
    ///
    /// An empty recording fails before any remote call is made, so a
    /// silent turn never spends a request.
    pub async fn run(
        &self,
        ctx: &TurnContext,
        recording: &[u8],
        extension: &str,
    ) -> Result<TurnOutcome> {
        let started_at = Utc::now();
        info!("Starting turn: {}", ctx.turn_id());

        let capture_path = ctx.capture_path(extension);
        persist_recording(&capture_path, recording)
            .context("Failed to persist recording")?;

        let transcript = self
            .transcriber
            .transcribe(&capture_path)
            .await
            .context("Transcription failed")?;

        let response_text = self
            .responder
            .respond(&transcript)
            .await
            .context("Response generation failed")?;

        let reply_path = ctx.reply_path();
        self.synthesizer
            .synthesize(&response_text, &reply_path)
            .await
            .context("Speech synthesis failed")?;

        let duration = Utc::now().signed_duration_since(started_at);
        let duration_secs = duration.num_milliseconds() as f64 / 1000.0;

        info!(
            "Turn {} complete in {:.1}s ({} chars transcribed, {} chars replied)",
            ctx.turn_id(),
            duration_secs,
            transcript.len(),
            response_text.len()
        );

        Ok(TurnOutcome {
            turn_id: ctx.turn_id().to_string(),
            transcript,
            response_text,
            reply_audio_path: reply_path,
            started_at,
            duration_secs,
        })
    }
}
