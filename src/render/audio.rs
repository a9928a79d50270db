use anyhow::{Context, Result};
use base64::Engine;
use std::path::Path;

/// Render an auto-playing audio element from a local audio file.
///
/// The file's full contents are base64-encoded and embedded inline as a
/// data URI, so the fragment is self-contained and the turn's audio file
/// never needs to be served separately.
pub fn inline_audio_player(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let audio = std::fs::read(path)
        .with_context(|| format!("Failed to read reply audio {}", path.display()))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&audio);

    Ok(format!(
        r#"<audio src="data:audio/mp3;base64,{encoded}" controls autoplay></audio>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_embeds_encoded_contents() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("reply.mp3");
        std::fs::write(&path, b"fake mp3 bytes")?;

        let html = inline_audio_player(&path)?;

        let expected = base64::engine::general_purpose::STANDARD.encode(b"fake mp3 bytes");
        assert!(html.contains(&expected));
        assert!(html.starts_with(r#"<audio src="data:audio/mp3;base64,"#));
        assert!(html.contains("autoplay"));
        Ok(())
    }

    #[test]
    fn player_fails_for_missing_file() {
        let result = inline_audio_player("/nonexistent/reply.mp3");
        assert!(result.is_err());
    }
}
