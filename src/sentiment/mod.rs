//! Per-message scoring and conversation-level aggregation.

pub mod aggregator;
pub mod engine;
pub mod lexicon;
pub mod scorer;
pub mod types;

pub use aggregator::{
    ConversationSummary, DEFAULT_MIN_CHANGE, DEFAULT_WINDOW, Distribution, LabelShare, MoodShift,
    SentimentStatistics, SignificantShift, SummaryOptions, TrendPoint, summarize, summarize_records,
    summarize_with, trend_shifts,
};
pub use engine::SentimentEngine;
pub use lexicon::LexiconEngine;
pub use scorer::Scorer;
pub use types::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, RawScores, ScoreRecord, SentimentLabel, Thresholds,
};
