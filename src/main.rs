#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use liabot::Config;
use liabot::app::dispatch::dispatch;
use liabot::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    // Logs go to stderr so the chat transcript on stdout stays clean
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.tracing_level()
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dispatch(cli, &config)
}
