use crate::sentiment::SentimentLabel;
use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red bold: failures
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, decorative rules
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: prompts, command names
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Cyan: field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Blue bold: the user's prompt marker
pub fn user<D: Display>(text: D) -> String {
    style(text).blue().bold().to_string()
}

/// Text colored by sentiment: green positive, red negative, yellow neutral
pub fn sentiment<D: Display>(label: SentimentLabel, text: D) -> String {
    let styled = style(text);
    match label {
        SentimentLabel::Positive => styled.green(),
        SentimentLabel::Negative => styled.red(),
        SentimentLabel::Neutral => styled.yellow(),
    }
    .to_string()
}

pub fn emoji(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "😊",
        SentimentLabel::Negative => "😔",
        SentimentLabel::Neutral => "😐",
    }
}

/// `Positive 😊`, colored by label
pub fn badge(label: SentimentLabel) -> String {
    sentiment(label, format!("{label} {}", emoji(label)))
}
