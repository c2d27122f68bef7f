use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kham_config::Config;
use kham_core::GlossaryEntry;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod render;
mod services;
mod state;

use self::cli::{Cli, Command};
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("KHAM_LOG_JSON").is_ok_and(|v| v == "1") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new(),
    };
    let state = AppState::new(config);

    match cli.command {
        Command::Lookup { term } => commands::lookup(&state, &term.join(" "), cli.plain).await,
        Command::Add { en, th, description } => {
            commands::add(&state, GlossaryEntry::new(en, th, description), cli.plain).await
        }
        Command::List => commands::list(&state, cli.plain).await,
        Command::Repl => commands::repl(&state, cli.plain).await,
    }
}
