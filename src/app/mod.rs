pub mod dispatch;
pub mod repl;
pub mod report;
pub mod status;

use crate::config::Config;
use crate::sentiment::LexiconEngine;
use anyhow::{Context, Result};
use tracing::info;

/// Build the sentiment engine: the bundled lexicon, extended by the configured
/// lexicon file when there is one.
pub fn build_engine(config: &Config) -> Result<LexiconEngine> {
    let Some(path) = config.lexicon_path() else {
        return Ok(LexiconEngine::default());
    };
    let engine = LexiconEngine::from_file(&path)
        .with_context(|| format!("Sentiment engine unavailable ({})", path.display()))?;
    info!(path = %path.display(), words = engine.len(), "loaded custom lexicon");
    Ok(engine)
}
