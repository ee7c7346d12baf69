//! Rule-based valence lexicon engine.
//!
//! Scores text by looking words up in a valence lexicon and applying the usual
//! rule set of lexicon scorers: degree boosters, negation within a three-word
//! window, shouting emphasis, a contrastive "but" shift and punctuation
//! emphasis. The summed valence is squashed into a compound score in
//! `[-1, 1]`.

mod default_words;

use super::engine::SentimentEngine;
use super::types::RawScores;
use crate::error::ScoringError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_VALENCE: f64 = 4.0;

/// Bundled [`SentimentEngine`] backed by an in-memory valence lexicon.
#[derive(Debug, Clone)]
pub struct LexiconEngine {
    valences: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for LexiconEngine {
    fn default() -> Self {
        let mut valences = HashMap::new();
        for (word, valence) in default_words::POSITIVE_WORDS
            .iter()
            .chain(default_words::NEGATIVE_WORDS)
        {
            valences.insert((*word).to_string(), *valence);
        }
        Self {
            valences,
            boosters: default_words::BOOSTER_WORDS.iter().copied().collect(),
        }
    }
}

impl LexiconEngine {
    /// Built-in lexicon extended by a lexicon file.
    ///
    /// The file is tab-separated, one `word<TAB>valence[<TAB>...]` entry per
    /// line, valence in `[-4, 4]`; extra columns are ignored, which makes the
    /// VADER lexicon file usable as is. Blank lines and `#` comments are
    /// skipped. File entries override built-in words.
    pub fn from_file(path: &Path) -> Result<Self, ScoringError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ScoringError::Unavailable(format!("cannot read lexicon {}: {e}", path.display()))
        })?;
        let mut engine = Self::default();
        let loaded = engine.extend_from_str(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), entries = loaded, "loaded lexicon file");
        Ok(engine)
    }

    fn extend_from_str(&mut self, contents: &str, origin: &str) -> Result<usize, ScoringError> {
        let mut loaded = 0;
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            let lexicon_error = |message: String| ScoringError::Lexicon {
                path: origin.to_string(),
                line: idx + 1,
                message,
            };
            let valence: f64 = columns
                .next()
                .ok_or_else(|| lexicon_error("missing valence column".into()))?
                .trim()
                .parse()
                .map_err(|e| lexicon_error(format!("invalid valence: {e}")))?;
            if word.is_empty() {
                return Err(lexicon_error("empty word".into()));
            }
            if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                return Err(lexicon_error(format!("valence {valence} outside [-4, 4]")));
            }
            self.valences.insert(word.to_lowercase(), valence);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    fn word_valences(&self, tokens: &[Token<'_>]) -> Vec<f64> {
        let shouting_contrast = tokens.iter().any(|t| t.is_shouted())
            && tokens.iter().any(|t| !t.is_shouted());

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if self.boosters.contains_key(token.lower.as_str()) {
                valences.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valences.get(&token.lower).copied() else {
                valences.push(0.0);
                continue;
            };

            if shouting_contrast && token.is_shouted() {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for distance in 1..=3 {
                let Some(prev) = i.checked_sub(distance).map(|j| &tokens[j]) else {
                    break;
                };
                if let Some(direction) = self.boosters.get(prev.lower.as_str()) {
                    let dampening = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += BOOSTER_INCREMENT * direction * dampening * valence.signum();
                }
            }

            let negated = (1..=3)
                .filter_map(|distance| i.checked_sub(distance))
                .any(|j| default_words::NEGATIONS.contains(&tokens[j].lower.as_str()));
            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences.push(valence);
        }

        if let Some(but_at) = tokens.iter().position(|t| t.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_at {
                    *valence *= 0.5;
                } else if i > but_at {
                    *valence *= 1.5;
                }
            }
        }

        valences
    }
}

impl SentimentEngine for LexiconEngine {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity_scores(&self, text: &str) -> Result<RawScores, ScoringError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(RawScores::neutral());
        }

        let valences = self.word_valences(&tokens);
        let emphasis = punctuation_emphasis(text);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neutral_count = 0.0;
        for &valence in &valences {
            if valence > 0.0 {
                pos_sum += valence + 1.0;
            } else if valence < 0.0 {
                neg_sum += valence - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neutral_count;
        if total <= 0.0 {
            return Ok(RawScores::neutral());
        }

        Ok(RawScores {
            compound: round3(compound),
            pos: round3(pos_sum / total),
            neg: round3(neg_sum.abs() / total),
            neu: round3(neutral_count / total),
        })
    }
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_shouted(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && self.raw.chars().count() > 1
            && !self.raw.chars().any(char::is_lowercase)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
    let questions = text.chars().filter(|&c| c == '?').count();
    #[allow(clippy::cast_precision_loss)]
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    #[allow(clippy::cast_precision_loss)]
    let exclamation_emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
    exclamation_emphasis + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
