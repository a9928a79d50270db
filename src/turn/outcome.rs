use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of one completed turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Turn identifier (also the storage subdirectory name)
    pub turn_id: String,

    /// Text recognized from the captured audio
    pub transcript: String,

    /// Reply text generated from the transcript
    pub response_text: String,

    /// Where the synthesized reply audio was written
    pub reply_audio_path: PathBuf,

    /// When the turn started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the whole turn
    pub duration_secs: f64,
}
