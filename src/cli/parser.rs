//! Tokenizer for interpreter input lines.

/// Command name used when the user enters an empty line.
pub const DEFAULT_COMMAND: &str = "help";

/// A tokenized input line: lower-cased command name plus raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Blank input becomes the `help` command. Arguments keep their case.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();

    let Some(command) = tokens.next() else {
        return ParsedInput {
            command: DEFAULT_COMMAND.to_string(),
            args: Vec::new(),
        };
    };

    ParsedInput {
        command: command.to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    }
}
