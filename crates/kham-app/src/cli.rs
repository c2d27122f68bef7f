use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kham",
    about = "Look up an English term, translate its definition to Thai and summarize it"
)]
pub struct Cli {
    /// JSON config file; defaults plus environment overrides when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Human-readable output instead of JSON
    #[arg(long, global = true)]
    pub plain: bool,
    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a term
    Lookup {
        /// Term to search for; multiple words are joined with spaces
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Add a term to the glossary
    Add {
        #[arg(long)]
        en: String,
        #[arg(long)]
        th: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print every glossary entry
    List,
    /// Read terms from stdin, one per line
    Repl,
}
