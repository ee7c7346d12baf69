use super::types::RawScores;
use crate::error::ScoringError;

/// Lexicon-based polarity scorer consumed by [`Scorer`](super::Scorer).
///
/// Implementations must be deterministic for a given input and free of side
/// effects; the scorer calls them once per non-empty message and never caches.
pub trait SentimentEngine: Send + Sync {
    /// Short identifier used in logs and `status` output.
    fn name(&self) -> &str;

    /// Score `text`, which is never empty or whitespace-only.
    fn polarity_scores(&self, text: &str) -> Result<RawScores, ScoringError>;
}
