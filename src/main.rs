//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive command loop on
//! stdin/stdout and saves the book when the loop ends.

use anyhow::Result;
use contact_book::cli::run_session;
use contact_book::{Config, Context, Interpreter, JsonFileBookRepository};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the prompt on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_file.display());

    let repository = JsonFileBookRepository::new(&config.book_file);
    let interpreter = Interpreter::new(Context {
        today: chrono::Local::now().date_naive(),
        birthday_window_days: config.birthday_window_days,
    });

    let stdin = io::stdin();
    let saved = run_session(&repository, &interpreter, stdin.lock(), io::stdout())?;

    info!("Contact Book shutdown complete ({} contacts)", saved);
    Ok(())
}
