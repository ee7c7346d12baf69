use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `LiaBot`.
///
/// Library callers match on these to decide whether to abort or degrade;
/// application code keeps using `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum LiaError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Sentiment scoring ───────────────────────────────────────────────
    #[error("scoring: {0}")]
    Scoring(#[from] ScoringError),

    // ── Session ─────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Export / import ─────────────────────────────────────────────────
    #[error("export: {0}")]
    Export(#[from] ExportError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Scoring errors ─────────────────────────────────────────────────────────

/// Failures of the sentiment engine behind the scorer.
///
/// Degenerate input (empty or whitespace-only text) is never an error.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("sentiment engine unavailable: {0}")]
    Unavailable(String),

    #[error("lexicon {path}: line {line}: {message}")]
    Lexicon {
        path: String,
        line: usize,
        message: String,
    },
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("history entry out of order: {0}")]
    OutOfOrder(String),
}

// ─── Export errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported export document: {0}")]
    Unsupported(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, LiaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = LiaError::Config(ConfigError::Validation("window must be >= 1".into()));
        assert!(err.to_string().contains("validation failed"));
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn scoring_unavailable_names_the_cause() {
        let err = LiaError::Scoring(ScoringError::Unavailable("lexicon missing".into()));
        assert_eq!(
            err.to_string(),
            "scoring: sentiment engine unavailable: lexicon missing"
        );
    }

    #[test]
    fn lexicon_error_carries_location() {
        let err = ScoringError::Lexicon {
            path: "vader.txt".into(),
            line: 12,
            message: "bad valence".into(),
        };
        assert!(err.to_string().contains("vader.txt"));
        assert!(err.to_string().contains("line 12"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let lia_err: LiaError = anyhow_err.into();
        assert!(lia_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn export_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LiaError = ExportError::from(json_err).into();
        assert!(err.to_string().starts_with("export: json:"));
    }
}
