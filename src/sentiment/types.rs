use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Compound score at or above which a message counts as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a message counts as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Classified polarity of a message or of a whole conversation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score with the fixed thresholds.
    ///
    /// Both boundaries are inclusive: `0.05` is positive, `-0.05` is negative.
    pub fn from_compound(compound: f64) -> Self {
        Self::from_compound_with(compound, Thresholds::default())
    }

    pub fn from_compound_with(compound: f64, thresholds: Thresholds) -> Self {
        if compound >= thresholds.positive {
            Self::Positive
        } else if compound <= thresholds.negative {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Classification boundaries for [`SentimentLabel::from_compound_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: POSITIVE_THRESHOLD,
            negative: NEGATIVE_THRESHOLD,
        }
    }
}

/// Raw engine output, before normalization and classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

impl RawScores {
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
        }
    }

    /// Replace NaN with zero and clamp every field to its documented range.
    pub(crate) fn sanitized(self) -> Self {
        fn finite(v: f64) -> f64 {
            if v.is_nan() { 0.0 } else { v }
        }
        Self {
            compound: finite(self.compound).clamp(-1.0, 1.0),
            pos: finite(self.pos).clamp(0.0, 1.0),
            neg: finite(self.neg).clamp(0.0, 1.0),
            neu: finite(self.neu).clamp(0.0, 1.0),
        }
    }
}

/// Scores for one analyzed message.
///
/// The label is always derived from `compound`; there is no way to construct
/// or deserialize a record whose label disagrees with its compound score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredScore")]
pub struct ScoreRecord {
    compound: f64,
    pos: f64,
    neg: f64,
    neu: f64,
    label: SentimentLabel,
    word_count: usize,
}

impl ScoreRecord {
    pub fn new(raw: RawScores, word_count: usize) -> Self {
        let raw = raw.sanitized();
        Self {
            compound: raw.compound,
            pos: raw.pos,
            neg: raw.neg,
            neu: raw.neu,
            label: SentimentLabel::from_compound(raw.compound),
            word_count,
        }
    }

    /// Record for empty or whitespace-only input.
    pub fn neutral() -> Self {
        Self::new(RawScores::neutral(), 0)
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn pos(&self) -> f64 {
        self.pos
    }

    pub fn neg(&self) -> f64 {
        self.neg
    }

    pub fn neu(&self) -> f64 {
        self.neu
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

/// On-disk shape of a [`ScoreRecord`]. A stored label is accepted but ignored.
#[derive(Deserialize)]
struct StoredScore {
    compound: f64,
    #[serde(default)]
    pos: f64,
    #[serde(default)]
    neg: f64,
    #[serde(default)]
    neu: f64,
    #[serde(default, rename = "label")]
    _label: Option<SentimentLabel>,
    #[serde(default)]
    word_count: usize,
}

impl From<StoredScore> for ScoreRecord {
    fn from(stored: StoredScore) -> Self {
        Self::new(
            RawScores {
                compound: stored.compound,
                pos: stored.pos,
                neg: stored.neg,
                neu: stored.neu,
            },
            stored.word_count,
        )
    }
}
