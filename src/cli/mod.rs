//! Line-oriented command interpreter.
//!
//! Turns raw input lines into address book operations and user-facing
//! replies. The core models never print or log; this layer decides how
//! errors are shown.

pub mod commands;
pub mod handlers;
pub mod interpreter;
pub mod parser;
pub mod session;

pub use commands::{render_help, Command, UnknownCommand};
pub use handlers::{Context, Reply};
pub use interpreter::Interpreter;
pub use parser::{parse_input, ParsedInput};
pub use session::run_session;
