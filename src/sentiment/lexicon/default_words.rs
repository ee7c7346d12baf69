//! Built-in valence lists for [`LexiconEngine`](super::LexiconEngine).
//!
//! Valences use the `[-4, 4]` scale of rule-based lexicons such as VADER, so a
//! full lexicon file in that format can be layered on top of these words.

pub(super) const POSITIVE_WORDS: &[(&str, f64)] = &[
    // Strong
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("brilliant", 2.8),
    ("perfect", 2.7),
    ("outstanding", 3.0),
    ("superb", 3.1),
    ("thrilled", 2.7),
    ("delighted", 2.9),
    ("ecstatic", 2.9),
    ("best", 3.2),
    // Moderate
    ("happy", 2.7),
    ("glad", 2.0),
    ("great", 3.1),
    ("good", 1.9),
    ("nice", 1.8),
    ("lovely", 2.8),
    ("pleasant", 2.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("grateful", 2.0),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("proud", 2.1),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("relieved", 1.5),
    ("hopeful", 1.6),
    ("cheerful", 2.5),
    ("friend", 2.2),
    ("friends", 2.1),
    ("friendly", 2.2),
    ("kind", 2.4),
    ("smile", 1.5),
    ("laugh", 2.6),
    ("beautiful", 2.9),
    ("win", 2.8),
    ("won", 2.7),
    ("success", 2.7),
    ("successful", 2.8),
    // Mild
    ("better", 1.9),
    ("improving", 1.8),
    ("improved", 2.1),
    ("progress", 1.6),
    ("help", 1.7),
    ("helped", 1.7),
    ("helpful", 1.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("fine", 0.8),
    ("cool", 1.3),
    ("interesting", 1.7),
    ("hope", 1.9),
    ("safe", 1.9),
    ("yes", 1.7),
];

pub(super) const NEGATIVE_WORDS: &[(&str, f64)] = &[
    // Strong
    ("hate", -2.7),
    ("hated", -3.2),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("worst", -3.1),
    ("miserable", -2.2),
    ("devastated", -3.1),
    ("disgusting", -2.4),
    ("furious", -2.7),
    ("hopeless", -2.0),
    ("depressed", -2.3),
    ("dreadful", -1.9),
    ("disaster", -3.1),
    // Moderate
    ("sad", -2.1),
    ("angry", -2.3),
    ("upset", -1.6),
    ("bad", -2.5),
    ("hurt", -2.4),
    ("lonely", -1.5),
    ("cry", -2.1),
    ("crying", -2.1),
    ("afraid", -2.2),
    ("scared", -1.9),
    ("anxious", -1.0),
    ("worried", -1.2),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("overwhelmed", -1.5),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("sick", -2.3),
    ("pain", -2.3),
    ("fail", -2.5),
    ("failed", -2.3),
    ("lost", -1.3),
    ("lose", -1.7),
    ("problem", -1.7),
    ("problems", -1.7),
    // Mild
    ("boring", -1.3),
    ("bored", -1.1),
    ("difficult", -1.1),
    ("hard", -0.4),
    ("wrong", -2.1),
    ("worse", -2.1),
    ("sorry", -0.3),
    ("pressure", -1.2),
    ("no", -1.2),
];

/// Degree modifiers; positive entries intensify, negative entries soften.
pub(super) const BOOSTER_WORDS: &[(&str, f64)] = &[
    ("absolutely", 1.0),
    ("completely", 1.0),
    ("extremely", 1.0),
    ("incredibly", 1.0),
    ("really", 1.0),
    ("so", 1.0),
    ("very", 1.0),
    ("totally", 1.0),
    ("truly", 1.0),
    ("super", 1.0),
    ("much", 1.0),
    ("most", 1.0),
    ("barely", -1.0),
    ("hardly", -1.0),
    ("slightly", -1.0),
    ("somewhat", -1.0),
    ("marginally", -1.0),
    ("kinda", -1.0),
    ("sorta", -1.0),
];

pub(super) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "nowhere", "neither", "nor",
    "cannot", "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "isnt", "isn't", "wasnt", "wasn't", "arent", "aren't", "wont", "won't", "wouldnt",
    "wouldn't", "shouldnt", "shouldn't", "aint", "ain't", "without",
];
