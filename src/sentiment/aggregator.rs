//! Conversation-level aggregation of per-message scores.
//!
//! Everything here is total: the empty history, all-empty messages and a zero
//! window all resolve to zero/neutral defaults instead of errors.

use super::types::{ScoreRecord, SentimentLabel};
use crate::session::SessionHistory;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default moving-average window for the trend timeline.
pub const DEFAULT_WINDOW: usize = 2;
/// Default compound delta that makes a transition "significant".
pub const DEFAULT_MIN_CHANGE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Moving-average window for [`sentiment_trend`]; values below 1 act as 1.
    pub window: usize,
    /// Threshold for [`significant_shifts`].
    pub min_change: f64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            min_change: DEFAULT_MIN_CHANGE,
        }
    }
}

/// Label change between two consecutive messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodShift {
    pub at_index: usize,
    pub from_label: SentimentLabel,
    pub to_label: SentimentLabel,
}

/// Consecutive messages whose compound moved by at least `min_change`, or
/// whose labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificantShift {
    pub at_index: usize,
    pub from_label: SentimentLabel,
    pub to_label: SentimentLabel,
    pub from_compound: f64,
    pub to_compound: f64,
    pub magnitude: f64,
}

/// One point of the moving-average timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub index: usize,
    pub label: SentimentLabel,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelShare {
    pub count: usize,
    /// Raw fraction in `[0, 1]`.
    pub fraction: f64,
}

impl LabelShare {
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    pub positive: LabelShare,
    pub negative: LabelShare,
    pub neutral: LabelShare,
}

impl Distribution {
    pub fn share(&self, label: SentimentLabel) -> LabelShare {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        self.share(label).percentage()
    }

    pub fn total(&self) -> usize {
        self.positive.count + self.negative.count + self.neutral.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentStatistics {
    pub average_compound: f64,
    /// Sample standard deviation; zero with fewer than two messages.
    pub compound_std: f64,
    pub min_compound: f64,
    pub max_compound: f64,
}

/// Session-level report recomputed from the history on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub message_count: usize,
    pub overall_compound: f64,
    pub overall_label: SentimentLabel,
    pub distribution: Distribution,
    pub mood_shifts: Vec<MoodShift>,
    pub statistics: SentimentStatistics,
    pub window: usize,
    pub trend: Vec<TrendPoint>,
    pub significant_shifts: Vec<SignificantShift>,
}

/// Summarize a session with the given trend window.
pub fn summarize(history: &SessionHistory, window: usize) -> ConversationSummary {
    summarize_with(
        history,
        &SummaryOptions {
            window,
            ..SummaryOptions::default()
        },
    )
}

pub fn summarize_with(history: &SessionHistory, options: &SummaryOptions) -> ConversationSummary {
    summarize_records(&history.records(), options)
}

pub fn summarize_records(records: &[ScoreRecord], options: &SummaryOptions) -> ConversationSummary {
    let overall_compound = weighted_compound(records);
    let window = options.window.max(1);
    let summary = ConversationSummary {
        message_count: records.len(),
        overall_compound,
        overall_label: SentimentLabel::from_compound(overall_compound),
        distribution: distribution(records),
        mood_shifts: mood_shifts(records),
        statistics: statistics(records),
        window,
        trend: sentiment_trend(records, window),
        significant_shifts: significant_shifts(records, options.min_change),
    };
    debug!(
        messages = summary.message_count,
        overall = summary.overall_compound,
        label = %summary.overall_label,
        shifts = summary.mood_shifts.len(),
        "summarized conversation"
    );
    summary
}

/// Mean compound weighted by the square root of each message's word count.
///
/// Empty messages carry zero weight; if every weight is zero the result is
/// `0.0`.
#[allow(clippy::cast_precision_loss)]
pub fn weighted_compound(records: &[ScoreRecord]) -> f64 {
    let (weighted_sum, total_weight) =
        records
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, total), record| {
                let weight = (record.word_count() as f64).sqrt();
                (sum + record.compound() * weight, total + weight)
            });

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn distribution(records: &[ScoreRecord]) -> Distribution {
    let mut dist = Distribution::default();
    for record in records {
        match record.label() {
            SentimentLabel::Positive => dist.positive.count += 1,
            SentimentLabel::Negative => dist.negative.count += 1,
            SentimentLabel::Neutral => dist.neutral.count += 1,
        }
    }

    if !records.is_empty() {
        let n = records.len() as f64;
        for share in [&mut dist.positive, &mut dist.negative, &mut dist.neutral] {
            share.fraction = share.count as f64 / n;
        }
    }
    dist
}

/// Every index whose label differs from the previous message's label.
pub fn mood_shifts(records: &[ScoreRecord]) -> Vec<MoodShift> {
    records
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].label() != pair[1].label())
        .map(|(i, pair)| MoodShift {
            at_index: i + 1,
            from_label: pair[0].label(),
            to_label: pair[1].label(),
        })
        .collect()
}

/// Trailing moving average of compound scores over `window` messages.
#[allow(clippy::cast_precision_loss)]
pub fn sentiment_trend(records: &[ScoreRecord], window: usize) -> Vec<TrendPoint> {
    let window = window.max(1);
    (0..records.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &records[start..=i];
            let average =
                slice.iter().map(ScoreRecord::compound).sum::<f64>() / slice.len() as f64;
            TrendPoint {
                index: i,
                label: SentimentLabel::from_compound(average),
                average,
            }
        })
        .collect()
}

/// Label changes along a smoothed trend.
pub fn trend_shifts(trend: &[TrendPoint]) -> Vec<MoodShift> {
    trend
        .windows(2)
        .filter(|pair| pair[0].label != pair[1].label)
        .map(|pair| MoodShift {
            at_index: pair[1].index,
            from_label: pair[0].label,
            to_label: pair[1].label,
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub fn statistics(records: &[ScoreRecord]) -> SentimentStatistics {
    if records.is_empty() {
        return SentimentStatistics::default();
    }

    let n = records.len() as f64;
    let compounds = records.iter().map(ScoreRecord::compound);
    let average = compounds.clone().sum::<f64>() / n;
    let compound_std = if records.len() > 1 {
        let variance = compounds
            .clone()
            .map(|c| (c - average).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    SentimentStatistics {
        average_compound: average,
        compound_std,
        min_compound: compounds.clone().fold(f64::INFINITY, f64::min),
        max_compound: compounds.fold(f64::NEG_INFINITY, f64::max),
    }
}

pub fn significant_shifts(records: &[ScoreRecord], min_change: f64) -> Vec<SignificantShift> {
    records
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (prev, curr) = (pair[0], pair[1]);
            let magnitude = (curr.compound() - prev.compound()).abs();
            (magnitude >= min_change || prev.label() != curr.label()).then_some(
                SignificantShift {
                    at_index: i + 1,
                    from_label: prev.label(),
                    to_label: curr.label(),
                    from_compound: prev.compound(),
                    to_compound: curr.compound(),
                    magnitude,
                },
            )
        })
        .collect()
}
