use crate::error::SessionError;
use crate::sentiment::ScoreRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One analyzed user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub record: ScoreRecord,
    pub timestamp: DateTime<Utc>,
    /// Bot reply produced for this message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// Chronological, append-only list of analyzed messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from stored entries, rejecting timestamps that go
    /// backwards.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Result<Self, SessionError> {
        if let Some(pos) = entries
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(SessionError::OutOfOrder(format!(
                "entry {} at {} precedes entry {} at {}",
                pos + 1,
                entries[pos + 1].timestamp.to_rfc3339(),
                pos,
                entries[pos].timestamp.to_rfc3339()
            )));
        }
        Ok(Self { entries })
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Scores in chronological order.
    pub fn records(&self) -> Vec<ScoreRecord> {
        self.entries.iter().map(|entry| entry.record).collect()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A single conversation: its identity, start time and history.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: SessionHistory,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: SessionHistory::new(),
        }
    }

    pub fn restore(id: Uuid, started_at: DateTime<Utc>, history: SessionHistory) -> Self {
        Self {
            id,
            started_at,
            history,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Append an analyzed message stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>, record: ScoreRecord) -> &HistoryEntry {
        self.record_with_reply(message, record, None)
    }

    pub fn record_with_reply(
        &mut self,
        message: impl Into<String>,
        record: ScoreRecord,
        reply: Option<String>,
    ) -> &HistoryEntry {
        let now = Utc::now();
        // Wall clocks can step backwards; keep the history monotonic.
        let timestamp = self
            .history
            .last()
            .map_or(now, |last| last.timestamp.max(now));
        self.history.push(HistoryEntry {
            message: message.into(),
            record,
            timestamp,
            reply,
        });
        let count = self.history.len();
        tracing::debug!(session = %self.id, messages = count, "recorded message");
        &self.history.entries[count - 1]
    }

    /// Drop all history and restart the session clock.
    pub fn reset(&mut self) {
        tracing::info!(session = %self.id, dropped = self.history.len(), "session reset");
        self.history.clear();
        self.started_at = Utc::now();
    }
}
