use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{info, warn};

use super::file::AudioFile;

/// Persist a recorded audio buffer to the turn's capture file.
///
/// The buffer arrives already encoded (whatever the browser recorder
/// produced) and is written as-is with overwrite semantics: a re-recorded
/// turn replaces the previous capture, never appends to it.
///
/// An empty buffer means no recording was made; that is an error here so
/// no downstream remote call can happen for a silent turn.
pub fn persist_recording(path: &Path, recording: &[u8]) -> Result<()> {
    if recording.is_empty() {
        bail!("No audio was recorded");
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create turn directory {}", parent.display()))?;
    }

    std::fs::write(path, recording)
        .with_context(|| format!("Failed to write capture file {}", path.display()))?;

    info!(
        "Persisted recording: {} ({} bytes)",
        path.display(),
        recording.len()
    );

    // WAV captures can be probed for sanity; other encodings (webm/ogg from
    // the browser recorder) are opaque to us and go to the API unprobed.
    if path.extension().is_some_and(|ext| ext == "wav") {
        match AudioFile::probe(path) {
            Ok(probe) => info!(
                "Capture probe: {:.1}s, {}Hz, {} channels",
                probe.duration_seconds, probe.sample_rate, probe.channels
            ),
            Err(e) => warn!("Capture is not a readable WAV file: {}", e),
        }
    }

    Ok(())
}
