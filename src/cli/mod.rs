use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `LiaBot` - conversational sentiment companion for the terminal.
#[derive(Parser, Debug)]
#[command(name = "liabot")]
#[command(version)]
#[command(about = "Chat in the terminal and see how the conversation felt.", long_about = None)]
pub struct Cli {
    /// Log at debug level (overrides `log_level` in config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start an interactive chat session (default)
    Chat {
        /// Bot name shown in replies and exports
        #[arg(long)]
        name: Option<String>,

        /// Moving-average window for the mood trend
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        window: Option<u64>,

        /// Seed for reply selection (reproducible sessions)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score one or more messages as a single conversation and print the summary
    Analyze {
        /// Messages in conversation order
        #[arg(required = true)]
        messages: Vec<String>,

        /// Moving-average window for the mood trend
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        window: Option<u64>,

        /// Print machine-readable JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Re-summarize a saved conversation export
    Report {
        /// Path to a JSON export written by `save`
        file: PathBuf,

        /// Print machine-readable JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Show configuration and engine status
    Status,
}
