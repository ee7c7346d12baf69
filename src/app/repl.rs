use crate::app::report::render_summary;
use crate::chat::ChatBot;
use crate::commands::{Command, handle_command, parse_command};
use crate::config::Config;
use crate::ui::style;
use anyhow::{Context, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Yes/no and free-text questions asked during a session.
pub trait Prompts {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompts;

impl Prompts for TerminalPrompts {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(style::yellow(prompt))
            .default(false)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(style::yellow(prompt))
            .default(default.to_string())
            .interact_text()?)
    }
}

/// Drive one chat session until `exit` or end of input, then print the
/// summary and offer to save it.
pub fn run_session<R: BufRead, W: Write>(
    bot: &mut ChatBot,
    config: &Config,
    mut input: R,
    out: &mut W,
    prompts: &mut dyn Prompts,
) -> Result<()> {
    writeln!(
        out,
        "\n{}",
        style::success(format!(
            "💬 {} is ready. How can I help you today?",
            bot.name()
        ))
    )?;
    writeln!(out, "{}", style::dim("Type 'help' for commands."))?;

    let mut line = String::new();
    loop {
        write!(out, "\n{} ", style::user("You:"))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(out, "\n{}", style::yellow("End of input. Exiting..."))?;
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(command) = parse_command(text) {
            let mut confirm = |prompt: &str| prompts.confirm(prompt);
            match handle_command(&command, bot, config, &mut confirm) {
                Ok(result) => {
                    writeln!(out, "{}", result.text)?;
                    if result.exit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(?command, "command failed: {e:#}");
                    writeln!(out, "{}", style::error(format!("✗ {e:#}")))?;
                }
            }
            continue;
        }

        let turn = bot.reply(text)?;
        let label = turn.record.label();
        writeln!(
            out,
            "  {}",
            style::sentiment(
                label,
                format!(
                    "→ Sentiment: {label} {} (score: {:.3})",
                    style::emoji(label),
                    turn.record.compound()
                )
            )
        )?;
        writeln!(
            out,
            "\n{} {}",
            style::success(format!("{}:", bot.name())),
            turn.reply
        )?;
    }

    finish_session(bot, config, out, prompts)
}

fn finish_session<W: Write>(
    bot: &mut ChatBot,
    config: &Config,
    out: &mut W,
    prompts: &mut dyn Prompts,
) -> Result<()> {
    let session = bot.session();
    info!(
        session = %session.id(),
        messages = session.history().len(),
        "conversation complete"
    );
    writeln!(out, "\n{}", style::cyan("=".repeat(60)))?;
    writeln!(out, "{}", style::cyan(format!("{:^60}", "CONVERSATION COMPLETE")))?;
    writeln!(out, "{}", style::cyan("=".repeat(60)))?;
    writeln!(
        out,
        "{}",
        render_summary(
            &bot.summary(),
            session.history(),
            Some(Utc::now() - session.started_at())
        )
    )?;

    if !session.history().is_empty() && prompts.confirm("Save conversation to file?")? {
        let filename = prompts.input("Filename", &config.export.default_filename)?;
        let save = Command::Save {
            filename: Some(filename),
        };
        let mut no_confirm = |_: &str| -> Result<bool> { Ok(true) };
        match handle_command(&save, bot, config, &mut no_confirm) {
            Ok(result) => writeln!(out, "{}", result.text)?,
            Err(e) => writeln!(out, "{}", style::error(format!("✗ {e:#}")))?,
        }
    }

    writeln!(
        out,
        "\n{}",
        style::success(format!(
            "Thank you for chatting with {}! Goodbye! 👋",
            bot.name()
        ))
    )?;
    Ok(())
}
