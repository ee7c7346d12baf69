use crate::sentiment::SentimentLabel;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

const POSITIVE: &[&str] = &[
    "That's wonderful to hear! 😊 What made your day so good?",
    "I'm so glad to hear that! 🌟 Tell me more!",
    "Fantastic! It's great to hear positive news.",
    "Awesome! What specifically made you feel happy?",
    "That's excellent! 🌈",
];

const NEGATIVE: &[&str] = &[
    "I'm sorry you're feeling that way. 😔 Want to talk about it?",
    "That sounds tough. I'm here to listen if you want to share more.",
    "I understand it's hard. What can I do to support you?",
    "That must be challenging. Remember, it's okay to feel this way.",
    "I'm here for you. Take your time.",
];

const NEUTRAL: &[&str] = &[
    "Thanks for sharing. What would you like to discuss?",
    "I understand. Tell me more about what's on your mind.",
    "Got it. What's happening with you today?",
    "Okay. How are you feeling about that?",
];

const SHORT: &[&str] = &[
    "Got it. Tell me more.",
    "I see. What else is on your mind?",
    "Okay. What would you like to talk about?",
];

const GRATITUDE: &[&str] = &[
    "You're welcome! 😊 Is there anything else I can help with?",
    "Glad I could help! Let me know if you need anything else.",
    "Happy to help! What's next for you today?",
];

const STRESS: &[&str] = &[
    "Stress can be overwhelming. Want to try a simple breathing exercise?",
    "I hear you're stressed. Sometimes taking a short break can help.",
    "That sounds challenging. Remember to be kind to yourself today.",
];

const IMPROVEMENT: &[&str] = &[
    "That's great progress! Every step forward counts. 🎉",
    "Improvement takes time - you're doing amazing!",
    "Celebrate the small wins! You're moving in the right direction. 💪",
];

pub const AFFIRMATIVE_FOLLOW_UP: &str = "Great! Let's continue.";
pub const DECLINED_FOLLOW_UP: &str = "Okay, no problem. What would you like to talk about instead?";

const STRESS_WORDS: &[&str] = &["stress", "stressed", "anxious", "overwhelmed", "pressure"];
const IMPROVEMENT_WORDS: &[&str] = &["improving", "better", "progress", "improvement"];
const YES_WORDS: &[&str] = &["yes", "yeah", "sure", "ok", "okay"];
const NO_WORDS: &[&str] = &["no", "nope", "not really"];

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Gratitude,
    FollowUpYes,
    FollowUpNo,
    Short,
    Stress,
    Improvement,
    Sentiment(SentimentLabel),
}

impl ReplyKind {
    /// Candidate replies for this rule.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Gratitude => GRATITUDE,
            Self::FollowUpYes => &[AFFIRMATIVE_FOLLOW_UP],
            Self::FollowUpNo => &[DECLINED_FOLLOW_UP],
            Self::Short => SHORT,
            Self::Stress => STRESS,
            Self::Improvement => IMPROVEMENT,
            Self::Sentiment(SentimentLabel::Positive) => POSITIVE,
            Self::Sentiment(SentimentLabel::Negative) => NEGATIVE,
            Self::Sentiment(SentimentLabel::Neutral) => NEUTRAL,
        }
    }
}

/// Decide which rule applies to `text`.
///
/// Rules are checked in order: thanks, short answers (with yes/no detection
/// when the previous message asked something), stress keywords, improvement
/// keywords, then the sentiment label.
pub fn classify_reply(text: &str, label: SentimentLabel, previous: Option<&str>) -> ReplyKind {
    let lower = text.trim().to_lowercase();

    if lower.contains("thank") {
        return ReplyKind::Gratitude;
    }

    if lower.split_whitespace().count() <= 2 {
        let asked = previous.is_some_and(|prev| {
            let prev = prev.to_lowercase();
            prev.contains('?') || prev.contains("can i") || prev.contains("would you")
        });
        if asked {
            if YES_WORDS.contains(&lower.as_str()) {
                return ReplyKind::FollowUpYes;
            }
            if NO_WORDS.contains(&lower.as_str()) {
                return ReplyKind::FollowUpNo;
            }
        }
        return ReplyKind::Short;
    }

    if STRESS_WORDS.iter().any(|w| lower.contains(w)) {
        return ReplyKind::Stress;
    }

    if IMPROVEMENT_WORDS.iter().any(|w| lower.contains(w)) {
        return ReplyKind::Improvement;
    }

    ReplyKind::Sentiment(label)
}

/// Picks a reply template for each user message.
#[derive(Debug)]
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic responder for reproducible sessions and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reply(&mut self, text: &str, label: SentimentLabel, previous: Option<&str>) -> String {
        let kind = classify_reply(text, label, previous);
        let templates = kind.templates();
        templates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(AFFIRMATIVE_FOLLOW_UP)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thanks_wins_over_everything() {
        assert_eq!(
            classify_reply("thanks, I feel stressed", SentimentLabel::Negative, None),
            ReplyKind::Gratitude
        );
    }

    #[test]
    fn short_answer_to_question_is_follow_up() {
        let prev = Some("Want to try a breathing exercise?");
        assert_eq!(
            classify_reply("yes", SentimentLabel::Positive, prev),
            ReplyKind::FollowUpYes
        );
        assert_eq!(
            classify_reply("Not really", SentimentLabel::Neutral, prev),
            ReplyKind::FollowUpNo
        );
    }

    #[test]
    fn short_answer_without_question_is_short() {
        assert_eq!(
            classify_reply("yes", SentimentLabel::Positive, Some("I went out today")),
            ReplyKind::Short
        );
        assert_eq!(
            classify_reply("hmm ok", SentimentLabel::Neutral, None),
            ReplyKind::Short
        );
    }

    #[test]
    fn stress_keywords_before_sentiment() {
        assert_eq!(
            classify_reply("work has me so overwhelmed lately", SentimentLabel::Negative, None),
            ReplyKind::Stress
        );
    }

    #[test]
    fn improvement_keywords_before_sentiment() {
        assert_eq!(
            classify_reply("I'm feeling much better now", SentimentLabel::Positive, None),
            ReplyKind::Improvement
        );
    }

    #[test]
    fn falls_back_to_label_templates() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(
                classify_reply("the day went the way it went", label, None),
                ReplyKind::Sentiment(label)
            );
        }
    }

    #[test]
    fn reply_comes_from_the_selected_templates() {
        let mut responder = Responder::seeded(7);
        for _ in 0..20 {
            let reply = responder.reply("I had a terrible awful day", SentimentLabel::Negative, None);
            assert!(NEGATIVE.contains(&reply.as_str()), "unexpected reply: {reply}");
        }
    }

    #[test]
    fn seeded_responders_agree() {
        let mut a = Responder::seeded(42);
        let mut b = Responder::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.reply("what a lovely afternoon it was", SentimentLabel::Positive, None),
                b.reply("what a lovely afternoon it was", SentimentLabel::Positive, None)
            );
        }
    }
}
