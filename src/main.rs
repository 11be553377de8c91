use std::fs::OpenOptions;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quizbox::{App, BankSource, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question bank to play: a CSV path or an http(s) URL
    #[arg(short, long, global = true)]
    bank: Option<BankSource>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a question bank and report the questions it yields
    Check {
        /// CSV path or http(s) URL (defaults to the configured bank)
        source: Option<BankSource>,
    },
}

/// Filter used when RUST_LOG is not set
const DEFAULT_FILTER: &str = "quizbox=info";

/// Log to stderr, for commands that do not take over the terminal
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Log to a file, since the TUI owns the terminal
fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { source }) => {
            init_stderr_logging();
            let config = Config::load()?;
            let source = source.or(cli.bank).unwrap_or_else(|| config.bank_source());

            let questions = source
                .load()
                .await
                .with_context(|| format!("Failed to load question bank from {}", source))?;

            println!("{}: {} usable questions", source, questions.len());
            for (i, question) in questions.iter().enumerate() {
                println!("{:>3}. [{}] {}", i + 1, question.answer, question.prompt);
            }
            if questions.is_empty() {
                anyhow::bail!("No usable questions: every row lacks a question or an answer");
            }
        }
        None => {
            init_file_logging()?;
            // Launch TUI
            let config = Config::load()?;
            let source = cli.bank.unwrap_or_else(|| config.bank_source());
            let mut app = App::new(config, source)?;
            app.run().await?;
        }
    }

    Ok(())
}
