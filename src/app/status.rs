use crate::app::build_engine;
use crate::config::Config;
use crate::sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentEngine};

pub fn render_status(config: &Config) -> String {
    let engine = match build_engine(config) {
        Ok(engine) => format!("{} ({} words)", engine.name(), engine.len()),
        Err(e) => format!("unavailable: {e:#}"),
    };
    let lexicon = config
        .lexicon_path()
        .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string());
    let export_dir = config
        .export
        .directory
        .as_deref()
        .unwrap_or("(current directory)");

    [
        "◆ LiaBot status".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Data dir    {}", config.data_dir.display()),
        format!("Config      {}", config.config_path.display()),
        String::new(),
        format!("  Bot name      {}", config.bot_name),
        format!("  Log level     {}", config.log_level),
        format!("  Engine        {engine}"),
        format!("  Lexicon       {lexicon}"),
        format!("  Thresholds    positive >= {POSITIVE_THRESHOLD}, negative <= {NEGATIVE_THRESHOLD}"),
        format!("  Trend window  {}", config.mood.window),
        format!("  Min change    {}", config.mood.min_change),
        format!("  Export dir    {export_dir}"),
        format!("  Export file   {}", config.export.default_filename),
    ]
    .join("\n")
}
