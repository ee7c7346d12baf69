pub mod text;

pub use text::{truncate_for_display, word_count};
