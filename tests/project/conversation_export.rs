use std::sync::Arc;

use liabot::chat::{ChatBot, Responder};
use liabot::sentiment::{LexiconEngine, Scorer, SummaryOptions, summarize_with};
use liabot::session::{read_export, write_export};

fn conversation() -> ChatBot {
    let mut bot = ChatBot::with_responder(
        "LiaBot",
        Scorer::new(Arc::new(LexiconEngine::default())),
        SummaryOptions::default(),
        Responder::seeded(9),
    );
    for text in [
        "I had a terrible morning",
        "But lunch with friends helped",
        "I'm feeling much better now",
    ] {
        bot.reply(text).unwrap();
    }
    bot
}

#[test]
fn saved_conversation_re_summarizes_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversation.json");
    let bot = conversation();
    let original = bot.summary();

    write_export(&path, &bot.export()).unwrap();
    let export = read_export(&path).unwrap();
    let session = export.to_session().unwrap();
    let replayed = summarize_with(session.history(), &SummaryOptions::default());

    assert_eq!(replayed.message_count, original.message_count);
    assert_eq!(replayed.distribution, original.distribution);
    assert_eq!(replayed.mood_shifts, original.mood_shifts);
    assert!((replayed.overall_compound - original.overall_compound).abs() < 1e-9);
    assert_eq!(session.id(), bot.session().id());
}

#[test]
fn export_json_has_flat_message_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversation.json");
    write_export(&path, &conversation().export()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    let messages = value["conversation"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    for message in messages {
        for key in ["text", "compound", "pos", "neg", "neu", "label", "word_count", "timestamp"] {
            assert!(message.get(key).is_some(), "missing {key}");
        }
        assert!(message["reply"].is_string());
    }
    assert_eq!(value["summary"]["overall_label"], "Positive");
    assert_eq!(value["summary"]["mood_shifts"][0]["at_index"], 1);
    assert_eq!(value["metadata"]["format_version"], 1);
}

#[test]
fn tampered_label_is_recomputed_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversation.json");
    write_export(&path, &conversation().export()).unwrap();

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    value["conversation"][0]["label"] = serde_json::json!("Positive");
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let export = read_export(&path).unwrap();
    assert_eq!(
        export.conversation[0].score.label(),
        liabot::SentimentLabel::Negative
    );
}
