pub mod schema;

pub use schema::{Config, ExportConfig, MoodConfig, SentimentConfig};
