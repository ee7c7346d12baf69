use super::responder::Responder;
use crate::error::ScoringError;
use crate::sentiment::{ConversationSummary, ScoreRecord, Scorer, SummaryOptions, summarize_with};
use crate::session::{ConversationExport, Session};
use tracing::debug;

/// One exchange: the bot's reply and the score given to the user's message.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub reply: String,
    pub record: ScoreRecord,
}

/// Scores each message, records it in the session and picks a reply.
#[derive(Debug)]
pub struct ChatBot {
    name: String,
    scorer: Scorer,
    session: Session,
    responder: Responder,
    options: SummaryOptions,
}

impl ChatBot {
    pub fn new(name: impl Into<String>, scorer: Scorer, options: SummaryOptions) -> Self {
        Self::with_responder(name, scorer, options, Responder::new())
    }

    pub fn with_responder(
        name: impl Into<String>,
        scorer: Scorer,
        options: SummaryOptions,
        responder: Responder,
    ) -> Self {
        Self {
            name: name.into(),
            scorer,
            session: Session::new(),
            responder,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Score `text`, append it to the session and produce a reply.
    ///
    /// On a scoring failure nothing is recorded.
    pub fn reply(&mut self, text: &str) -> Result<Turn, ScoringError> {
        let record = self.scorer.score(text)?;
        let previous = self.session.history().last().map(|entry| entry.message.as_str());
        let reply = self.responder.reply(text, record.label(), previous);

        debug!(
            messages = self.session.history().len() + 1,
            label = %record.label(),
            "chat turn"
        );
        self.session
            .record_with_reply(text, record, Some(reply.clone()));
        Ok(Turn { reply, record })
    }

    pub fn summary(&self) -> ConversationSummary {
        summarize_with(self.session.history(), &self.options)
    }

    pub fn export(&self) -> ConversationExport {
        ConversationExport::new(&self.session, self.summary(), &self.name)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}
