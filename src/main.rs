//! # clipfind CLI
//!
//! Searches a local clipboard-history store for entries containing a
//! keyword and prints a launcher-ready Script Filter envelope on stdout.
//!
//! ## Usage
//!
//! ```bash
//! clipfind "<keyword>" <path/to/clipboard.alfdb>
//! ```
//!
//! The keyword may be empty (matches every entry). Output is a single JSON
//! object:
//!
//! ```json
//! {"skipknowledge": true, "items": [{"title": "...", "arg": "...", "subtitle": "..."}]}
//! ```
//!
//! Diagnostics go to stderr (enable with `RUST_LOG=debug`); stdout stays a
//! clean protocol channel for the launcher. Exit status is 0 on success,
//! including zero matches, and non-zero when the store cannot be read.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clipfind::models::ScriptFilterOutput;
use clipfind::search;

/// Search a clipboard-history store and emit launcher-ready JSON.
#[derive(Parser)]
#[command(
    name = "clipfind",
    about = "Search a clipboard-history store and emit launcher-ready JSON",
    version
)]
struct Cli {
    /// Keyword to look for; an empty keyword matches every entry.
    keyword: String,

    /// Path to the clipboard history store (SQLite database).
    store: PathBuf,

    /// Cap the number of results, most recent first.
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut items = search::search_store(&cli.keyword, &cli.store).await?;
    if let Some(limit) = cli.limit {
        items.truncate(limit);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, &ScriptFilterOutput::new(items))?;
    handle.flush()?;

    Ok(())
}
