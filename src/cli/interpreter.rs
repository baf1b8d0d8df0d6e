//! The read-eval-print loop.

use super::commands::{render_help, Command};
use super::handlers::{self, Context, Reply};
use super::parser::parse_input;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Line-oriented command interpreter over an address book.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter {
    ctx: Context,
}

impl Interpreter {
    /// Interpreter that treats `ctx.today` as the current date.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Handle one input line, always producing a reply.
    pub fn execute(&self, line: &str, book: &mut AddressBook) -> Reply {
        let input = parse_input(line);

        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("{}", e);
                return Reply::text(format!("Invalid command!\n{}", render_help()));
            }
        };

        debug!(command = %command, args = input.args.len(), "Executing command");
        match handlers::dispatch(command, &input.args, book, &self.ctx) {
            Ok(mut reply) => {
                reply.changed = command.mutates();
                reply
            }
            Err(e) => {
                warn!(command = %command, "Command failed: {}", e);
                Reply::text(handlers::error_message(command, &e))
            }
        }
    }

    /// Prompt for commands on `output` and read them from `input` until an
    /// exit command or end of input.
    ///
    /// The book is not saved here; callers persist it however the loop ends.
    pub fn run<R, W>(&self, book: &mut AddressBook, input: R, output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.run_with(book, input, output, |_| {})
    }

    /// Like [`Interpreter::run`], calling `on_change` after every command
    /// that modified the book.
    pub fn run_with<R, W, F>(
        &self,
        book: &mut AddressBook,
        mut input: R,
        mut output: W,
        mut on_change: F,
    ) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&AddressBook),
    {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            let reply = self.execute(&line, book);
            writeln!(output, "{}", reply.message)?;

            if reply.changed {
                on_change(book);
            }
            if reply.exit {
                return Ok(());
            }
        }
    }
}
