use crate::app::build_engine;
use crate::app::repl::{TerminalPrompts, run_session};
use crate::app::report::{render_statement, render_summary};
use crate::app::status::render_status;
use crate::chat::{ChatBot, Responder};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::sentiment::{ConversationSummary, ScoreRecord, Scorer, SummaryOptions, summarize_with};
use crate::session::{Session, read_export};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

fn summary_options(config: &Config, window: Option<u64>) -> Result<SummaryOptions> {
    let mut options = config.summary_options();
    if let Some(window) = window {
        options.window = usize::try_from(window).context("--window is too large")?;
    }
    Ok(options)
}

fn scorer(config: &Config) -> Result<Scorer> {
    let scorer = Scorer::new(Arc::new(build_engine(config)?));
    debug!(engine = scorer.engine_name(), "sentiment engine ready");
    Ok(scorer)
}

fn run_chat(
    config: &Config,
    name: Option<String>,
    window: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let options = summary_options(config, window)?;
    let name = name.unwrap_or_else(|| config.bot_name.clone());
    let scorer = scorer(config)?;
    let mut bot = match seed {
        Some(seed) => ChatBot::with_responder(name, scorer, options, Responder::seeded(seed)),
        None => ChatBot::new(name, scorer, options),
    };

    info!(bot = bot.name(), session = %bot.session().id(), "starting chat");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(
        &mut bot,
        config,
        stdin.lock(),
        &mut stdout,
        &mut TerminalPrompts,
    )
}

#[derive(Serialize)]
struct AnalyzedMessage<'a> {
    text: &'a str,
    #[serde(flatten)]
    score: ScoreRecord,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    messages: Vec<AnalyzedMessage<'a>>,
    summary: ConversationSummary,
}

fn run_analyze(
    config: &Config,
    messages: &[String],
    window: Option<u64>,
    json: bool,
) -> Result<()> {
    let options = summary_options(config, window)?;
    let scorer = scorer(config)?;

    let mut session = Session::new();
    for message in messages {
        let record = scorer.score(message)?;
        session.record(message.as_str(), record);
    }
    let summary = summarize_with(session.history(), &options);

    if json {
        let output = AnalyzeOutput {
            messages: session
                .history()
                .iter()
                .map(|entry| AnalyzedMessage {
                    text: &entry.message,
                    score: entry.record,
                })
                .collect(),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "{}",
            render_statement(i, &entry.message, entry.record.label(), entry.record.compound())
        );
    }
    println!("{}", render_summary(&summary, session.history(), None));
    Ok(())
}

fn run_report(config: &Config, file: &Path, json: bool) -> Result<()> {
    let export = read_export(file)
        .with_context(|| format!("Failed to read conversation export {}", file.display()))?;
    let session = export.to_session()?;
    let summary = summarize_with(session.history(), &config.summary_options());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Conversation with {} ({} messages, exported {})",
        export.metadata.bot_name,
        export.message_count(),
        export.metadata.exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let duration = export.summary.ended_at - export.summary.started_at;
    println!(
        "{}",
        render_summary(&summary, session.history(), Some(duration))
    );
    Ok(())
}

pub fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::Chat {
        name: None,
        window: None,
        seed: None,
    }) {
        Commands::Chat { name, window, seed } => run_chat(config, name, window, seed),
        Commands::Analyze {
            messages,
            window,
            json,
        } => run_analyze(config, &messages, window, json),
        Commands::Report { file, json } => run_report(config, &file, json),
        Commands::Status => {
            println!("{}", render_status(config));
            Ok(())
        }
    }
}
