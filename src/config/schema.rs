use crate::error::ConfigError;
use crate::sentiment::{DEFAULT_MIN_CHANGE, DEFAULT_WINDOW, SummaryOptions};
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// `~/.liabot` - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// "error" | "warn" | "info" | "debug" | "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub sentiment: SentimentConfig,

    #[serde(default)]
    pub mood: MoodConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_bot_name() -> String {
    "LiaBot".into()
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = UserDirs::new().map_or_else(
            || PathBuf::from(".liabot"),
            |u| u.home_dir().join(".liabot"),
        );
        Self {
            config_path: data_dir.join("config.toml"),
            data_dir,
            bot_name: default_bot_name(),
            log_level: default_log_level(),
            sentiment: SentimentConfig::default(),
            mood: MoodConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

// ── Sentiment engine ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Extra lexicon file (`word<TAB>valence` per line) layered over the
    /// built-in word list. Relative paths resolve against the data dir.
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

// ── Mood tracking ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    /// Moving-average window for the trend timeline
    #[serde(default = "default_window")]
    pub window: usize,
    /// Compound delta reported as a significant swing
    #[serde(default = "default_min_change")]
    pub min_change: f64,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_min_change() -> f64 {
    DEFAULT_MIN_CHANGE
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            min_change: default_min_change(),
        }
    }
}

// ── Export ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for saved conversations; current directory when unset
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "default_export_filename")]
    pub default_filename: String,
}

fn default_export_filename() -> String {
    "conversation.json".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            default_filename: default_export_filename(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.bot_name.trim().is_empty() {
            return Err(ConfigError::Validation("bot_name must not be empty".into()));
        }
        if self.mood.window == 0 {
            return Err(ConfigError::Validation("mood.window must be >= 1".into()));
        }
        if !(0.0..=2.0).contains(&self.mood.min_change) {
            return Err(ConfigError::Validation(
                "mood.min_change must be in [0.0, 2.0]".into(),
            ));
        }
        if self.export.default_filename.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.default_filename must not be empty".into(),
            ));
        }
        parse_level(&self.log_level)?;
        Ok(())
    }

    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home.join(".liabot"))
    }

    /// Load `config.toml` from `data_dir`, writing a default one on first run.
    pub fn load_or_init_in(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).context("Failed to create .liabot directory")?;
        }

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(e.to_string()))
                .context("Failed to parse config file")?;
            // Set computed paths that are skipped during serialization
            config.config_path.clone_from(&config_path);
            config.data_dir = data_dir.to_path_buf();
            config
        } else {
            let config = Self {
                config_path,
                data_dir: data_dir.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Bot name: LIABOT_BOT_NAME
        if let Some(name) = non_empty("LIABOT_BOT_NAME") {
            self.bot_name = name;
        }

        // Log level: LIABOT_LOG_LEVEL
        if let Some(level) = non_empty("LIABOT_LOG_LEVEL") {
            self.log_level = level;
        }

        // Trend window: LIABOT_WINDOW
        if let Some(window) = non_empty("LIABOT_WINDOW").and_then(|v| v.parse::<usize>().ok()) {
            if window >= 1 {
                self.mood.window = window;
            }
        }

        // Significant swing threshold: LIABOT_MIN_CHANGE
        if let Some(min_change) =
            non_empty("LIABOT_MIN_CHANGE").and_then(|v| v.parse::<f64>().ok())
        {
            if (0.0..=2.0).contains(&min_change) {
                self.mood.min_change = min_change;
            }
        }

        // Lexicon file: LIABOT_LEXICON
        if let Some(path) = non_empty("LIABOT_LEXICON") {
            self.sentiment.lexicon_path = Some(path);
        }

        // Export directory: LIABOT_EXPORT_DIR
        if let Some(dir) = non_empty("LIABOT_EXPORT_DIR") {
            self.export.directory = Some(dir);
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            window: self.mood.window,
            min_change: self.mood.min_change,
        }
    }

    pub fn tracing_level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::WARN)
    }

    pub fn lexicon_path(&self) -> Option<PathBuf> {
        self.sentiment
            .lexicon_path
            .as_deref()
            .map(|raw| resolve_against(&self.data_dir, raw))
    }

    /// Where `save` writes. A bare filename lands in `export.directory` when
    /// set, otherwise in the current directory.
    pub fn export_path(&self, filename: Option<&str>) -> PathBuf {
        let filename = filename
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(self.export.default_filename.as_str());
        let expanded = PathBuf::from(shellexpand::tilde(filename).into_owned());
        if expanded.is_absolute() {
            return expanded;
        }
        match self.export.directory.as_deref() {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()).join(expanded),
            None => expanded,
        }
    }
}

fn resolve_against(base: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn parse_level(raw: &str) -> std::result::Result<Level, ConfigError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::Validation(format!("unknown log_level: {raw}")))
}
