#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use liabot::error::ScoringError;
use liabot::sentiment::{RawScores, SentimentEngine};

/// Engine with canned compounds per exact message text; unknown text is 0.
#[derive(Default)]
pub struct StubEngine {
    scores: HashMap<String, f64>,
    seen: Mutex<Vec<String>>,
}

impl StubEngine {
    pub fn with(scores: &[(&str, f64)]) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(text, compound)| ((*text).to_string(), *compound))
                .collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl SentimentEngine for StubEngine {
    fn name(&self) -> &str {
        "stub"
    }

    fn polarity_scores(&self, text: &str) -> Result<RawScores, ScoringError> {
        self.seen.lock().unwrap().push(text.to_string());
        let compound = self.scores.get(text).copied().unwrap_or(0.0);
        let (pos, neg) = if compound > 0.0 {
            (compound, 0.0)
        } else {
            (0.0, -compound)
        };
        Ok(RawScores {
            compound,
            pos,
            neg,
            neu: 1.0 - pos - neg,
        })
    }
}

/// Engine that is never available.
pub struct OfflineEngine;

impl SentimentEngine for OfflineEngine {
    fn name(&self) -> &str {
        "offline"
    }

    fn polarity_scores(&self, _text: &str) -> Result<RawScores, ScoringError> {
        Err(ScoringError::Unavailable("engine offline".into()))
    }
}
