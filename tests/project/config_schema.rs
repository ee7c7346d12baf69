use liabot::config::Config;

#[test]
fn minimal_config_deserializes_with_defaults() {
    let toml = r#"
bot_name = "Ada"
"#;

    let parsed: Config = toml::from_str(toml).expect("minimal config should deserialize");

    assert_eq!(parsed.bot_name, "Ada");
    assert_eq!(parsed.log_level, "warn");
    assert_eq!(parsed.mood.window, 2);
    assert!((parsed.mood.min_change - 0.3).abs() < f64::EPSILON);
    assert!(parsed.sentiment.lexicon_path.is_none());
    assert_eq!(parsed.export.default_filename, "conversation.json");
    assert!(parsed.validate().is_ok());
}

#[test]
fn full_config_deserializes() {
    let toml = r#"
bot_name = "LiaBot"
log_level = "debug"

[sentiment]
lexicon_path = "~/words.tsv"

[mood]
window = 4
min_change = 0.5

[export]
directory = "/tmp/liabot"
default_filename = "chat.json"
"#;

    let parsed: Config = toml::from_str(toml).expect("full config should deserialize");

    assert_eq!(parsed.sentiment.lexicon_path.as_deref(), Some("~/words.tsv"));
    assert_eq!(parsed.summary_options().window, 4);
    assert_eq!(parsed.export.directory.as_deref(), Some("/tmp/liabot"));
    assert_eq!(
        parsed.export_path(None),
        std::path::PathBuf::from("/tmp/liabot/chat.json")
    );
    assert_eq!(parsed.tracing_level(), tracing::Level::DEBUG);
}

#[test]
fn computed_paths_are_not_serialized() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).expect("config should serialize");
    assert!(!text.contains("data_dir"));
    assert!(!text.contains("config_path"));
    assert!(text.contains("[mood]"));
}

#[test]
fn load_or_init_round_trips_saved_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::load_or_init_in(dir.path()).expect("first load");
    config.mood.window = 3;
    config.save().expect("save");

    let reloaded = Config::load_or_init_in(dir.path()).expect("reload");
    assert_eq!(reloaded.mood.window, 3);
    assert_eq!(reloaded.data_dir, dir.path());
}
