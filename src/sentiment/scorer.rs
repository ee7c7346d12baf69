use super::engine::SentimentEngine;
use super::types::ScoreRecord;
use crate::error::ScoringError;
use crate::utils::word_count;
use std::sync::Arc;
use tracing::debug;

/// Adapter between raw messages and an injected [`SentimentEngine`].
#[derive(Clone)]
pub struct Scorer {
    engine: Arc<dyn SentimentEngine>,
}

impl Scorer {
    pub fn new(engine: Arc<dyn SentimentEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Score one message.
    ///
    /// Empty and whitespace-only messages resolve to a neutral record without
    /// consulting the engine. Any other input is passed to the engine exactly
    /// once; the only failure is the engine itself being unavailable.
    pub fn score(&self, message: &str) -> Result<ScoreRecord, ScoringError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Ok(ScoreRecord::neutral());
        }

        let word_count = word_count(trimmed);
        let raw = self.engine.polarity_scores(message)?;
        let record = ScoreRecord::new(raw, word_count);

        debug!(
            engine = self.engine.name(),
            compound = record.compound(),
            label = %record.label(),
            word_count,
            "scored message"
        );
        Ok(record)
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("engine", &self.engine.name())
            .finish()
    }
}
