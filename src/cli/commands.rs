//! Command table for the interpreter.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input named a command that is not in the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// Every command the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Close,
    Exit,
    Hello,
    Add,
    Change,
    Phone,
    Delete,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Help,
}

impl Command {
    /// Commands listed by `help`, in display order.
    pub const LISTED: [Command; 12] = [
        Command::Close,
        Command::Exit,
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::Delete,
        Command::RemovePhone,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::All,
    ];

    /// The word typed to invoke this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Close => "close",
            Command::Exit => "exit",
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::All => "all",
            Command::Help => "help",
        }
    }

    /// Message shown before argument and validation errors.
    pub fn usage_hint(self) -> &'static str {
        match self {
            Command::Add | Command::Change | Command::RemovePhone => {
                "Please enter both name and phone number."
            }
            Command::Phone | Command::Delete => "Please enter name to get contact for",
            Command::AddBirthday | Command::ShowBirthday | Command::Birthdays => {
                "Please provide valid birthday date in the following format DD.MM.YYYY."
            }
            _ => "Invalid arguments.",
        }
    }

    pub fn terminates(self) -> bool {
        matches!(self, Command::Close | Command::Exit)
    }

    /// Whether a successful run of this command can modify the book.
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Command::Add
                | Command::Change
                | Command::Delete
                | Command::RemovePhone
                | Command::AddBirthday
        )
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Command::Help.name() {
            return Ok(Command::Help);
        }
        Command::LISTED
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `help` text: every listed command in table order.
pub fn render_help() -> String {
    let names: Vec<&str> = Command::LISTED.iter().map(|command| command.name()).collect();
    format!("list of allowed commands: [{}]", names.join(","))
}
