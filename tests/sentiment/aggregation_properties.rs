use std::sync::Arc;

use liabot::sentiment::{
    RawScores, ScoreRecord, Scorer, SentimentLabel, SummaryOptions, summarize, summarize_records,
};
use liabot::session::Session;

use crate::stub_engine::StubEngine;

const TERRIBLE_MORNING: [(&str, f64, usize); 3] = [
    ("I had a terrible morning", -0.612, 5),
    ("But lunch with friends helped", 0.445, 5),
    ("I'm feeling much better now", 0.521, 6),
];

fn record(compound: f64, words: usize) -> ScoreRecord {
    ScoreRecord::new(
        RawScores {
            compound,
            ..RawScores::neutral()
        },
        words,
    )
}

fn terrible_morning() -> Vec<ScoreRecord> {
    TERRIBLE_MORNING
        .iter()
        .map(|(_, compound, words)| record(*compound, *words))
        .collect()
}

#[test]
fn terrible_morning_scenario() {
    let summary = summarize_records(&terrible_morning(), &SummaryOptions::default());

    assert_eq!(summary.message_count, 3);
    assert_eq!(summary.distribution.positive.count, 2);
    assert_eq!(summary.distribution.negative.count, 1);
    assert_eq!(summary.distribution.neutral.count, 0);

    assert_eq!(summary.mood_shifts.len(), 1);
    let shift = summary.mood_shifts[0];
    assert_eq!(shift.at_index, 1);
    assert_eq!(shift.from_label, SentimentLabel::Negative);
    assert_eq!(shift.to_label, SentimentLabel::Positive);

    assert!(summary.overall_compound > -0.612 && summary.overall_compound < 0.521);
    assert!((summary.overall_compound - 0.1304).abs() < 1e-3);
    assert_eq!(summary.overall_label, SentimentLabel::Positive);
}

#[test]
fn scenario_through_a_session() {
    let engine = Arc::new(StubEngine::with(
        &TERRIBLE_MORNING.map(|(text, compound, _)| (text, compound)),
    ));
    let scorer = Scorer::new(engine);
    let mut session = Session::new();
    for (text, _, _) in TERRIBLE_MORNING {
        session.record(text, scorer.score(text).unwrap());
    }

    let summary = summarize(session.history(), 2);

    assert_eq!(summary.mood_shifts.len(), 1);
    assert_eq!(summary.mood_shifts[0].at_index, 1);
    assert_eq!(summary.overall_label, SentimentLabel::Positive);
}

#[test]
fn permutation_keeps_overall_and_distribution_but_moves_shifts() {
    let original = terrible_morning();
    let permuted = vec![original[1], original[0], original[2]];
    let options = SummaryOptions::default();

    let a = summarize_records(&original, &options);
    let b = summarize_records(&permuted, &options);

    assert!((a.overall_compound - b.overall_compound).abs() < 1e-12);
    assert_eq!(a.distribution, b.distribution);
    assert_ne!(a.mood_shifts, b.mood_shifts);
    assert_eq!(b.mood_shifts.len(), 2);
}

#[test]
fn empty_history_is_neutral_zero() {
    let session = Session::new();
    let summary = summarize(session.history(), 2);

    assert_eq!(summary.message_count, 0);
    assert!(summary.overall_compound.abs() < f64::EPSILON);
    assert_eq!(summary.overall_label, SentimentLabel::Neutral);
    assert_eq!(summary.distribution.total(), 0);
    assert!(summary.distribution.percentage(SentimentLabel::Positive).abs() < f64::EPSILON);
    assert!(summary.mood_shifts.is_empty());
    assert!(summary.trend.is_empty());
}

#[test]
fn all_neutral_history_has_no_shifts() {
    let records = vec![record(0.0, 3), record(0.02, 4), record(-0.03, 2)];
    let summary = summarize_records(&records, &SummaryOptions::default());

    assert_eq!(summary.overall_label, SentimentLabel::Neutral);
    assert_eq!(summary.distribution.neutral.count, 3);
    assert!((summary.distribution.percentage(SentimentLabel::Neutral) - 100.0).abs() < 1e-9);
    assert!(summary.mood_shifts.is_empty());
}

#[test]
fn only_empty_messages_resolve_to_neutral() {
    let records = vec![ScoreRecord::neutral(), ScoreRecord::neutral()];
    let summary = summarize_records(&records, &SummaryOptions::default());

    assert!(summary.overall_compound.abs() < f64::EPSILON);
    assert_eq!(summary.overall_label, SentimentLabel::Neutral);
    assert_eq!(summary.message_count, 2);
}

#[test]
fn longer_messages_weigh_more() {
    let short_negative = record(-0.5, 1);
    let long_positive = record(0.5, 16);
    let summary = summarize_records(
        &[short_negative, long_positive],
        &SummaryOptions::default(),
    );
    // weights 1 and 4
    assert!((summary.overall_compound - 0.3).abs() < 1e-9);
}

#[test]
fn window_does_not_change_mood_shifts() {
    let records = terrible_morning();
    let narrow = summarize_records(
        &records,
        &SummaryOptions {
            window: 1,
            ..SummaryOptions::default()
        },
    );
    let wide = summarize_records(
        &records,
        &SummaryOptions {
            window: 3,
            ..SummaryOptions::default()
        },
    );

    assert_eq!(narrow.mood_shifts, wide.mood_shifts);
    assert_eq!(narrow.trend.len(), 3);
    assert_eq!(wide.window, 3);
}

#[test]
fn summary_is_recomputed_from_current_history() {
    let mut session = Session::new();
    session.record("awful", record(-0.6, 1));
    let before = summarize(session.history(), 2);
    session.record("lovely", record(0.6, 1));
    let after = summarize(session.history(), 2);

    assert_eq!(before.message_count, 1);
    assert_eq!(after.message_count, 2);
    assert_eq!(after.mood_shifts.len(), 1);
}
