//! One interpreter session bracketed by load and save.

use super::interpreter::Interpreter;
use crate::repositories::BookRepository;
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

/// Load the book, run the interpreter, then save the book.
///
/// Every command that changes the book is saved as soon as it succeeds, so
/// an interrupted process keeps all completed edits. The final save happens
/// however the loop ends: an exit command, end of input or an I/O error
/// while reading commands. Returns the number of contacts saved.
pub fn run_session<B, R, W>(
    repository: &B,
    interpreter: &Interpreter,
    input: R,
    output: W,
) -> Result<usize>
where
    B: BookRepository + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut book = repository
        .load()
        .context("Failed to load address book")?;
    info!("Loaded address book with {} contacts", book.len());

    let outcome = interpreter.run_with(&mut book, input, output, |book| {
        match repository.save(book) {
            Ok(()) => debug!("Saved {} contacts after change", book.len()),
            Err(e) => warn!("Failed to save address book after change: {}", e),
        }
    });
    if let Err(e) = &outcome {
        error!("Interpreter stopped: {}", e);
    }

    repository
        .save(&book)
        .context("Failed to save address book")?;
    info!("Saved {} contacts", book.len());

    outcome.context("Failed to read commands")?;
    Ok(book.len())
}
