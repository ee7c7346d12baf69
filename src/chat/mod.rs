//! Rule-based conversation on top of the sentiment scorer.

pub mod bot;
pub mod responder;

pub use bot::{ChatBot, Turn};
pub use responder::{ReplyKind, Responder, classify_reply};
