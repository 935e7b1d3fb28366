//! reelbook CLI
//!
//! Interactive command-line manager for a local movie library.

mod cli_types;
mod error;

use std::io;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use reelbook_lib::Session;

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

/// Install `env_logger` on stderr. `RUST_LOG` applies unless a flag overrides it.
fn init_logging(quiet: bool, verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = reelbook_lib::load_settings();
    let db_path = reelbook_lib::resolve_database_path(cli.db, &settings);
    let policy = reelbook_lib::resolve_error_policy(cli.keep_going, &settings);

    let conn = reelbook_db::open_database(&db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })?;
    let count = reelbook_db::count_movies(&conn)
        .map_err(|e| CliError::database(format!("Failed to read movie library: {}", e)))?;

    log::info!(
        "{} {} ({} movies)",
        "Library:".if_supports_color(Stderr, |t| t.bold()),
        db_path.display().if_supports_color(Stderr, |t| t.cyan()),
        count,
    );
    log::debug!("Storage error policy: {:?}", policy);

    let mut session =
        Session::new(conn, io::stdin().lock(), io::stdout().lock()).with_policy(policy);
    session.run()?;
    Ok(())
}
