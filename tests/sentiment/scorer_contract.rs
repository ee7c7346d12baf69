use std::sync::Arc;

use liabot::error::ScoringError;
use liabot::sentiment::{Scorer, SentimentLabel};

use crate::stub_engine::{OfflineEngine, StubEngine};

#[test]
fn empty_message_is_neutral_without_engine_call() {
    let engine = Arc::new(StubEngine::with(&[("", 0.9)]));
    let scorer = Scorer::new(engine.clone());

    let record = scorer.score("").unwrap();

    assert_eq!(record.label(), SentimentLabel::Neutral);
    assert!(record.compound().abs() < f64::EPSILON);
    assert_eq!(record.word_count(), 0);
    assert!(engine.seen().is_empty());
}

#[test]
fn engine_sees_each_message_once() {
    let engine = Arc::new(StubEngine::with(&[("nice weather", 0.4)]));
    let scorer = Scorer::new(engine.clone());

    let record = scorer.score("nice weather").unwrap();

    assert_eq!(engine.seen(), vec!["nice weather"]);
    assert_eq!(record.label(), SentimentLabel::Positive);
    assert_eq!(record.word_count(), 2);
}

#[test]
fn threshold_boundaries_are_inclusive() {
    let engine = Arc::new(StubEngine::with(&[
        ("exactly positive", 0.05),
        ("exactly negative", -0.05),
        ("just inside", 0.049_999),
    ]));
    let scorer = Scorer::new(engine);

    assert_eq!(
        scorer.score("exactly positive").unwrap().label(),
        SentimentLabel::Positive
    );
    assert_eq!(
        scorer.score("exactly negative").unwrap().label(),
        SentimentLabel::Negative
    );
    assert_eq!(
        scorer.score("just inside").unwrap().label(),
        SentimentLabel::Neutral
    );
}

#[test]
fn offline_engine_is_unavailable() {
    let scorer = Scorer::new(Arc::new(OfflineEngine));
    assert!(matches!(
        scorer.score("anything at all"),
        Err(ScoringError::Unavailable(_))
    ));
    assert!(scorer.score("   ").is_ok());
}

#[test]
fn one_engine_serves_several_sessions() {
    let engine = Arc::new(StubEngine::with(&[("ok then", 0.1)]));
    let first = Scorer::new(engine.clone());
    let second = Scorer::new(engine.clone());

    first.score("ok then").unwrap();
    second.score("ok then").unwrap();

    assert_eq!(engine.seen().len(), 2);
}
