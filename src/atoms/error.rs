// ── Digest Atoms: Error Types ──────────────────────────────────────────────
// Single canonical error enum for the engine, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by domain (I/O, network, state, config).
//   • The `#[from]` attribute wires std/external error conversions automatically.
//   • Resolution-tier failures are NOT represented here: a failing tier is
//     caught locally, logged, and the chain falls through to the next tier.
//   • `State` is the one fatal variant: a corrupt snapshot must halt the run
//     before any delivery or commit, so the at-most-once guarantee holds.

use thiserror::Error;

// ── Primary error enum ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DigestError {
    /// Filesystem or OS-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP / network failure (reqwest layer).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Persisted delivery state is unreadable or structurally corrupt.
    /// Fatal for the run: guessing partial state risks re-sending delivered
    /// entries or permanently dropping unseen ones.
    #[error("State error: {0}")]
    State(String),

    /// Engine configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catch-all for errors that do not yet have a dedicated variant.
    /// Prefer adding a specific variant over using this in new code.
    #[error("{0}")]
    Other(String),
}

pub type DigestResult<T> = Result<T, DigestError>;

// ── String bridge ──────────────────────────────────────────────────────────
// Allows `?` on ad-hoc `Result<T, String>` expressions and terse
// `return Err(format!(...).into())` at collaborator boundaries.

impl From<String> for DigestError {
    fn from(s: String) -> Self {
        DigestError::Other(s)
    }
}

impl From<&str> for DigestError {
    fn from(s: &str) -> Self {
        DigestError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display() {
        let err = DigestError::State("snapshot is not valid JSON".into());
        assert_eq!(err.to_string(), "State error: snapshot is not valid JSON");
    }

    #[test]
    fn string_bridge() {
        let err: DigestError = "tier gave up".into();
        assert!(matches!(err, DigestError::Other(_)));
    }
}
