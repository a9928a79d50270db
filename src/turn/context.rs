use std::path::{Path, PathBuf};

/// The secret key authorizing remote API calls.
///
/// Held only in process memory for the duration of a request, and in the
/// browser for the session; never written to durable storage. Guaranteed
/// non-empty by construction, so a resolved credential is always usable.
#[derive(Clone)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Resolve the session credential: the per-request value wins, the
    /// locally configured default is the fallback. Empty strings count
    /// as absent — an empty credential must never reach the network.
    pub fn resolve(from_request: Option<&str>, configured: Option<&str>) -> Option<Self> {
        [from_request, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(|key| Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redacted so the secret can't leak through request logging
impl std::fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCredential(***)")
    }
}

/// Turn-scoped storage: each turn gets its own directory keyed by a
/// generated turn ID, so no two turns ever share audio files.
#[derive(Debug, Clone)]
pub struct TurnContext {
    turn_id: String,
    dir: PathBuf,
}

impl TurnContext {
    pub fn new(turns_root: impl AsRef<Path>) -> Self {
        let turn_id = format!("turn-{}", uuid::Uuid::new_v4());
        let dir = turns_root.as_ref().join(&turn_id);
        Self { turn_id, dir }
    }

    pub fn turn_id(&self) -> &str {
        &self.turn_id
    }

    /// Path for the captured recording. The extension follows whatever
    /// the browser recorder produced (webm, ogg, wav, ...).
    pub fn capture_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("capture.{extension}"))
    }

    /// Path for the synthesized reply audio (the API returns MP3).
    pub fn reply_path(&self) -> PathBuf {
        self.dir.join("reply.mp3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_request_credential() {
        let cred = SessionCredential::resolve(Some("sk-request"), Some("sk-config")).unwrap();
        assert_eq!(cred.as_str(), "sk-request");
    }

    #[test]
    fn resolve_falls_back_to_configured_default() {
        let cred = SessionCredential::resolve(None, Some("sk-config")).unwrap();
        assert_eq!(cred.as_str(), "sk-config");
    }

    #[test]
    fn resolve_treats_empty_and_blank_as_absent() {
        assert!(SessionCredential::resolve(Some(""), None).is_none());
        assert!(SessionCredential::resolve(Some("   "), Some("")).is_none());
        assert!(SessionCredential::resolve(None, None).is_none());
    }

    #[test]
    fn resolve_skips_empty_request_value() {
        let cred = SessionCredential::resolve(Some(""), Some("sk-config")).unwrap();
        assert_eq!(cred.as_str(), "sk-config");
    }

    #[test]
    fn debug_never_shows_the_secret() {
        let cred = SessionCredential::resolve(Some("sk-secret"), None).unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn turn_contexts_never_share_paths() {
        let a = TurnContext::new("data/turns");
        let b = TurnContext::new("data/turns");
        assert_ne!(a.turn_id(), b.turn_id());
        assert_ne!(a.reply_path(), b.reply_path());
        assert_ne!(a.capture_path("webm"), b.capture_path("webm"));
    }

    #[test]
    fn capture_path_uses_recorder_extension() {
        let ctx = TurnContext::new("data/turns");
        let path = ctx.capture_path("ogg");
        assert!(path.to_string_lossy().ends_with("capture.ogg"));
    }
}
