use crate::sentiment::{ConversationSummary, SentimentLabel, trend_shifts};
use crate::session::SessionHistory;
use crate::ui::style;
use crate::utils::truncate_for_display;
use chrono::TimeDelta;
use strum::IntoEnumIterator;

const RULE_WIDTH: usize = 60;
const STATEMENT_PREVIEW_CHARS: usize = 50;

/// `▓` per five percent, rounded down.
pub fn distribution_bar(percentage: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let blocks = (percentage.max(0.0) / 5.0).floor() as usize;
    "▓".repeat(blocks)
}

fn rule() -> String {
    style::cyan("=".repeat(RULE_WIDTH))
}

/// Render a summary for the terminal.
///
/// `duration` is shown when the session timing is known.
#[allow(clippy::too_many_lines)]
pub fn render_summary(
    summary: &ConversationSummary,
    history: &SessionHistory,
    duration: Option<TimeDelta>,
) -> String {
    let mut lines = vec![
        String::new(),
        rule(),
        style::cyan(format!("{:^RULE_WIDTH$}", "CONVERSATION SUMMARY")),
        rule(),
        String::new(),
        style::header("📊 Conversation Statistics:"),
    ];
    if let Some(duration) = duration {
        #[allow(clippy::cast_precision_loss)]
        let seconds = duration.num_milliseconds() as f64 / 1000.0;
        lines.push(format!("  Duration: {seconds:.1} seconds"));
    }
    lines.push(format!("  Messages: {}", summary.message_count));

    if !history.is_empty() {
        lines.push(String::new());
        lines.push(style::header("📝 Statement-level Sentiment Analysis:"));
        for (i, entry) in history.iter().enumerate() {
            let label = entry.record.label();
            lines.push(format!(
                "  {}. {}",
                i + 1,
                style::sentiment(label, truncate_for_display(&entry.message, STATEMENT_PREVIEW_CHARS))
            ));
            lines.push(format!(
                "     → {}",
                style::sentiment(
                    label,
                    format!(
                        "{label} {} (score: {:.3})",
                        style::emoji(label),
                        entry.record.compound()
                    )
                )
            ));
        }
    }

    lines.push(String::new());
    lines.push(style::header("🎯 Overall Conversation Sentiment:"));
    lines.push(format!("  {}", style::badge(summary.overall_label)));
    lines.push(format!(
        "  Compound score: {}",
        style::sentiment(
            summary.overall_label,
            format!("{:.3}", summary.overall_compound)
        )
    ));

    if summary.distribution.total() > 0 {
        lines.push(String::new());
        lines.push(style::header("📈 Sentiment Distribution:"));
        for label in SentimentLabel::iter() {
            let share = summary.distribution.share(label);
            lines.push(format!(
                "  {label}: {}",
                style::sentiment(
                    label,
                    format!(
                        "{} ({:.1}%) {}",
                        share.count,
                        share.percentage(),
                        distribution_bar(share.percentage())
                    )
                )
            ));
        }
    }

    if summary.message_count > 0 {
        let stats = &summary.statistics;
        lines.push(String::new());
        lines.push(style::header("📐 Score Statistics:"));
        lines.push(format!(
            "  mean {:.3}   std {:.3}   min {:.3}   max {:.3}",
            stats.average_compound, stats.compound_std, stats.min_compound, stats.max_compound
        ));

        lines.push(String::new());
        lines.push(style::header("📉 Mood Shifts:"));
        if summary.mood_shifts.is_empty() {
            lines.push(format!("  {}", style::cyan("No mood shifts detected.")));
        } else {
            for shift in &summary.mood_shifts {
                lines.push(format!(
                    "    - Message {}: {} → {}",
                    shift.at_index + 1,
                    style::sentiment(shift.from_label, shift.from_label),
                    style::sentiment(shift.to_label, shift.to_label)
                ));
            }
        }

        let smoothed = trend_shifts(&summary.trend);
        if summary.window > 1 && !smoothed.is_empty() {
            lines.push(format!(
                "  {}",
                style::cyan(format!(
                    "Averaged over {} messages, the mood turned {} time(s):",
                    summary.window,
                    smoothed.len()
                ))
            ));
            for shift in &smoothed {
                lines.push(format!(
                    "    - Message {}: {} → {}",
                    shift.at_index + 1,
                    style::sentiment(shift.from_label, shift.from_label),
                    style::sentiment(shift.to_label, shift.to_label)
                ));
            }
        }

        let swings: Vec<_> = summary
            .significant_shifts
            .iter()
            .filter(|s| s.from_label == s.to_label)
            .collect();
        if !swings.is_empty() {
            lines.push(format!("  {}", style::cyan("Large swings within a mood:")));
            for swing in swings {
                lines.push(format!(
                    "    - Message {}: {:+.3} ({:.3} → {:.3})",
                    swing.at_index + 1,
                    swing.to_compound - swing.from_compound,
                    swing.from_compound,
                    swing.to_compound
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(rule());
    lines.join("\n")
}

/// One line per scored message, used by `analyze`.
pub fn render_statement(index: usize, message: &str, label: SentimentLabel, compound: f64) -> String {
    format!(
        "  {}. {}\n     → {}",
        index + 1,
        style::sentiment(label, truncate_for_display(message, STATEMENT_PREVIEW_CHARS)),
        style::sentiment(
            label,
            format!("{label} {} (score: {compound:.3})", style::emoji(label))
        )
    )
}
