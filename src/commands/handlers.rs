use super::types::{Command, CommandResult};
use crate::app::report::render_summary;
use crate::chat::ChatBot;
use crate::config::Config;
use crate::session::write_export;
use crate::ui::style;
use anyhow::{Context, Result};
use chrono::Utc;

/// Run a chat built-in against the live session.
///
/// `confirm` is asked before anything destructive; the REPL backs it with a
/// terminal prompt.
pub fn handle_command(
    command: &Command,
    bot: &mut ChatBot,
    config: &Config,
    confirm: &mut dyn FnMut(&str) -> Result<bool>,
) -> Result<CommandResult> {
    match command {
        Command::Summary => Ok(handle_summary(bot)),
        Command::Save { filename } => handle_save(bot, config, filename.as_deref()),
        Command::Clear => handle_clear(bot, confirm),
        Command::Help => Ok(handle_help()),
        Command::Exit => Ok(CommandResult::exit(style::yellow(
            "Ending conversation and analyzing sentiment...",
        ))),
    }
}

fn handle_summary(bot: &ChatBot) -> CommandResult {
    let session = bot.session();
    let duration = Utc::now() - session.started_at();
    CommandResult::visible(render_summary(
        &bot.summary(),
        session.history(),
        Some(duration),
    ))
}

fn handle_save(bot: &ChatBot, config: &Config, filename: Option<&str>) -> Result<CommandResult> {
    let path = config.export_path(filename);
    write_export(&path, &bot.export())
        .with_context(|| format!("Failed to save conversation to {}", path.display()))?;
    Ok(CommandResult::visible(style::success(format!(
        "✓ Conversation saved to '{}'",
        path.display()
    ))))
}

fn handle_clear(
    bot: &mut ChatBot,
    confirm: &mut dyn FnMut(&str) -> Result<bool>,
) -> Result<CommandResult> {
    if !confirm("Clear conversation history?")? {
        return Ok(CommandResult::visible(style::dim("History kept.")));
    }
    bot.reset();
    Ok(CommandResult::visible(style::success(
        "✓ Conversation cleared",
    )))
}

pub fn help_text() -> String {
    "Available commands:\n\
     \x20 summary            -- Show conversation analysis\n\
     \x20 save, /save FILE   -- Save conversation to a JSON file\n\
     \x20 clear              -- Clear conversation history\n\
     \x20 exit, quit, bye    -- End conversation\n\
     \x20 help               -- Show this help message"
        .to_string()
}

fn handle_help() -> CommandResult {
    CommandResult::visible(style::cyan(help_text()))
}
