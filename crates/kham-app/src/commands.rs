use kham_core::{GlossaryEntry, LookupError, LookupResult};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;
use crate::state::AppState;

/// Trimmed term, or `None` for blank input
pub fn validate_term(input: &str) -> Option<&str> {
    let term = input.trim();
    (!term.is_empty()).then_some(term)
}

fn print_result(result: &LookupResult, plain: bool) -> anyhow::Result<()> {
    if plain {
        print!("{}", render::result_plain(result));
    } else {
        println!("{}", render::result_json(result)?);
    }
    Ok(())
}

fn print_error(err: &LookupError, plain: bool) -> anyhow::Result<()> {
    if plain {
        eprintln!("{}", err.user_message());
    } else {
        println!("{}", render::error_json(err)?);
    }
    Ok(())
}

/// Returns whether the lookup produced a result
pub async fn lookup(state: &AppState, input: &str, plain: bool) -> anyhow::Result<bool> {
    let Some(term) = validate_term(input) else {
        eprintln!("Please enter a term to search");
        return Ok(false);
    };

    let pipeline = state.pipeline().await?;
    match pipeline.process_word(term).await {
        Ok(result) => {
            tracing::debug!("'{}' answered from {}", result.term(), result.source());
            print_result(&result, plain)?;
            Ok(true)
        }
        Err(e) => {
            tracing::info!("Lookup of '{}' failed: {}", term, e);
            print_error(&e, plain)?;
            Ok(false)
        }
    }
}

pub async fn add(state: &AppState, entry: GlossaryEntry, plain: bool) -> anyhow::Result<bool> {
    if validate_term(&entry.en).is_none() || validate_term(&entry.th).is_none() {
        eprintln!("Both the English term and its Thai translation are required");
        return Ok(false);
    }

    let entry = GlossaryEntry::new(entry.en.trim(), entry.th.trim(), entry.description.trim());
    let pipeline = state.pipeline().await?;
    match pipeline.add_entry(entry.clone()) {
        Ok(()) => {
            if plain {
                println!("Added '{}' to the glossary", entry.en);
            } else {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
            Ok(true)
        }
        Err(e) => {
            print_error(&e, plain)?;
            Ok(false)
        }
    }
}

pub async fn list(state: &AppState, plain: bool) -> anyhow::Result<bool> {
    let pipeline = state.pipeline().await?;
    // Pick up edits made to the file since the store was opened
    if let Err(e) = pipeline.glossary().reload() {
        tracing::warn!("Glossary reload failed, listing current entries: {}", e);
        eprintln!("warning: glossary file could not be re-read, showing current entries");
    }
    let entries = pipeline.glossary().entries();

    if plain {
        print!("{}", render::entries_plain(&entries));
    } else {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }
    Ok(true)
}

/// Look up terms read from stdin until EOF
pub async fn repl(state: &AppState, plain: bool) -> anyhow::Result<bool> {
    let pipeline = state.pipeline().await?;
    let (translator_ready, summarizer_ready) = pipeline.warm_up().await;
    if !translator_ready {
        eprintln!("warning: translation is unavailable");
    }
    if !summarizer_ready {
        eprintln!("warning: summarization is unavailable");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(term) = validate_term(&line) else {
            eprintln!("Please enter a term to search");
            continue;
        };

        match pipeline.process_word(term).await {
            Ok(result) => print_result(&result, plain)?,
            Err(e) => print_error(&e, plain)?,
        }
    }

    Ok(true)
}
