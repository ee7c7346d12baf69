//! JSON export of a conversation: flat message records, the summary computed
//! at export time, and session metadata.

use super::types::{HistoryEntry, Session, SessionHistory};
use crate::error::{ExportError, LiaError};
use crate::sentiment::{ConversationSummary, ScoreRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

pub const EXPORT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedMessage {
    pub text: String,
    #[serde(flatten)]
    pub score: ScoreRecord,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSummary {
    #[serde(flatten)]
    pub summary: ConversationSummary,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub format_version: u32,
    pub bot_name: String,
    pub session_id: Uuid,
    pub exported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationExport {
    pub conversation: Vec<ExportedMessage>,
    pub summary: ExportedSummary,
    pub metadata: ExportMetadata,
}

impl ConversationExport {
    pub fn new(session: &Session, summary: ConversationSummary, bot_name: &str) -> Self {
        let now = Utc::now();
        Self {
            conversation: session
                .history()
                .iter()
                .map(|entry| ExportedMessage {
                    text: entry.message.clone(),
                    score: entry.record,
                    timestamp: entry.timestamp,
                    reply: entry.reply.clone(),
                })
                .collect(),
            summary: ExportedSummary {
                summary,
                started_at: session.started_at(),
                ended_at: now,
            },
            metadata: ExportMetadata {
                format_version: EXPORT_FORMAT_VERSION,
                bot_name: bot_name.to_string(),
                session_id: session.id(),
                exported_at: now,
            },
        }
    }

    /// Rebuild the session this export was taken from.
    pub fn to_session(&self) -> Result<Session, LiaError> {
        let entries = self
            .conversation
            .iter()
            .map(|message| HistoryEntry {
                message: message.text.clone(),
                record: message.score,
                timestamp: message.timestamp,
                reply: message.reply.clone(),
            })
            .collect();
        let history = SessionHistory::from_entries(entries)?;
        Ok(Session::restore(
            self.metadata.session_id,
            self.summary.started_at,
            history,
        ))
    }

    pub fn message_count(&self) -> usize {
        self.conversation.len()
    }
}

/// Write `export` as pretty JSON, creating parent directories as needed.
pub fn write_export(path: &Path, export: &ConversationExport) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, json)?;
    info!(
        path = %path.display(),
        messages = export.message_count(),
        "conversation exported"
    );
    Ok(())
}

pub fn read_export(path: &Path) -> Result<ConversationExport, ExportError> {
    let contents = fs::read_to_string(path)?;
    let export: ConversationExport = serde_json::from_str(&contents)?;
    if export.metadata.format_version != EXPORT_FORMAT_VERSION {
        return Err(ExportError::Unsupported(format!(
            "format version {} (expected {EXPORT_FORMAT_VERSION})",
            export.metadata.format_version
        )));
    }
    Ok(export)
}
