//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "reelbook")]
#[command(about = "Add, delete, and edit movies in a local SQLite library", long_about = None)]
pub(crate) struct Cli {
    /// Path to the movie database (defaults to settings.toml, then ./movies.db)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal log output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Report database errors and keep prompting instead of exiting
    #[arg(long)]
    pub keep_going: bool,
}
