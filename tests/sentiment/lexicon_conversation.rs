use std::sync::Arc;

use liabot::chat::{ChatBot, Responder};
use liabot::sentiment::{LexiconEngine, Scorer, SentimentLabel, SummaryOptions};

fn bot() -> ChatBot {
    ChatBot::with_responder(
        "LiaBot",
        Scorer::new(Arc::new(LexiconEngine::default())),
        SummaryOptions::default(),
        Responder::seeded(5),
    )
}

#[test]
fn terrible_morning_with_bundled_lexicon() {
    let mut bot = bot();
    let labels: Vec<_> = [
        "I had a terrible morning",
        "But lunch with friends helped",
        "I'm feeling much better now",
    ]
    .iter()
    .map(|text| bot.reply(text).unwrap().record.label())
    .collect();

    assert_eq!(
        labels,
        vec![
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Positive
        ]
    );

    let summary = bot.summary();
    assert_eq!(summary.mood_shifts.len(), 1);
    assert_eq!(summary.mood_shifts[0].at_index, 1);
    assert_eq!(summary.overall_label, SentimentLabel::Positive);
}

#[test]
fn negated_praise_reads_negative() {
    let mut bot = bot();
    let turn = bot.reply("I do not love this at all").unwrap();
    assert_eq!(turn.record.label(), SentimentLabel::Negative);
}

#[test]
fn plain_statement_reads_neutral() {
    let mut bot = bot();
    let turn = bot.reply("The meeting is at three on Tuesday").unwrap();
    assert_eq!(turn.record.label(), SentimentLabel::Neutral);
    assert_eq!(bot.summary().overall_label, SentimentLabel::Neutral);
}

#[test]
fn every_reply_is_recorded_with_its_message() {
    let mut bot = bot();
    for text in ["hello", "thanks a lot", "I'm so stressed about work lately"] {
        bot.reply(text).unwrap();
    }
    let history = bot.session().history();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|entry| entry.reply.is_some()));
    assert!(
        history
            .iter()
            .zip(history.iter().skip(1))
            .all(|(a, b)| a.timestamp <= b.timestamp)
    );
}
