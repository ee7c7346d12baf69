pub mod export;
pub mod types;

pub use export::{ConversationExport, EXPORT_FORMAT_VERSION, read_export, write_export};
pub use types::{HistoryEntry, Session, SessionHistory};
