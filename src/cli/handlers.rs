//! Command handlers.
//!
//! Each handler checks its arguments and validates every value before it
//! touches the book, so a failed command never leaves a partial change.

use super::commands::{render_help, Command};
use crate::domain::{Birthday, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Outcome of a successfully handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text shown to the user
    pub message: String,

    /// Whether the interpreter should stop after this reply
    pub exit: bool,

    /// Whether the command modified the book
    pub changed: bool,
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
            changed: false,
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: true,
            changed: false,
        }
    }
}

/// Inputs handlers need besides the book and their arguments.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub today: NaiveDate,
    pub birthday_window_days: u64,
}

/// Run `command` against `book`.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    ctx: &Context,
) -> BookResult<Reply> {
    match command {
        Command::Close | Command::Exit => Ok(Reply::exit("Good bye!")),
        Command::Hello => Ok(Reply::text("How can I help you?")),
        Command::Help => Ok(Reply::text(render_help())),
        Command::Add => add_contact(args, book),
        Command::Change => change_phone(args, book),
        Command::Phone => show_contact(args, book),
        Command::Delete => delete_contact(args, book),
        Command::RemovePhone => remove_phone(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => upcoming_birthdays(book, ctx),
        Command::All => list_contacts(book),
    }
}

/// Text shown when `command` fails with `err`.
pub fn error_message(command: Command, err: &BookError) -> String {
    match err {
        BookError::NotFound(name) => {
            format!("Record not found for the provided name. ({})", name)
        }
        BookError::Validation(_) | BookError::Argument(_) => {
            format!("{} ({})", command.usage_hint(), err)
        }
    }
}

/// First `N` arguments, ignoring any extras.
fn take_args<'a, const N: usize>(args: &'a [String], usage: &str) -> BookResult<[&'a str; N]> {
    if args.len() < N {
        return Err(BookError::Argument(format!("usage: {}", usage)));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<Reply> {
    let [name, raw_phone] = take_args::<2>(args, "add <name> <phone>")?;
    let phone = Phone::new(raw_phone)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone.as_str())?;
        return Ok(Reply::text("Contact updated."));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    Ok(Reply::text("Contact added."))
}

/// `change <name> <old phone> <new phone>`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> BookResult<Reply> {
    let [name, old, new] = take_args::<3>(args, "change <name> <old phone> <new phone>")?;
    let record = find_record_mut(book, name)?;

    if record.find_phone(old).is_none() {
        return Ok(Reply::text("Phone not found."));
    }
    record.edit_phone(old, new)?;
    Ok(Reply::text("Contacts' phone has been changed."))
}

/// `phone <name>`: the contact summary.
pub fn show_contact(args: &[String], book: &AddressBook) -> BookResult<Reply> {
    let [name] = take_args::<1>(args, "phone <name>")?;
    let record = find_record(book, name)?;
    Ok(Reply::text(record.to_string()))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> BookResult<Reply> {
    let [name] = take_args::<1>(args, "delete <name>")?;
    find_record(book, name)?;
    book.delete(name);
    Ok(Reply::text("Contact deleted."))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> BookResult<Reply> {
    let [name, phone] = take_args::<2>(args, "remove-phone <name> <phone>")?;
    let record = find_record_mut(book, name)?;

    if record.find_phone(phone).is_none() {
        return Ok(Reply::text("Phone not found."));
    }
    record.remove_phone(phone);
    Ok(Reply::text("Phone removed."))
}

/// `all`: one `<name> - <phones>` line per contact.
pub fn list_contacts(book: &AddressBook) -> BookResult<Reply> {
    if book.is_empty() {
        return Ok(Reply::text("No contacts saved."));
    }

    let lines: Vec<String> = book
        .iter()
        .map(|(name, record)| {
            let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
            format!("{} - {}", name, phones.join(","))
        })
        .collect();
    Ok(Reply::text(lines.join("\n")))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<Reply> {
    let [name, raw_birthday] = take_args::<2>(args, "add-birthday <name> <DD.MM.YYYY>")?;
    let record = find_record_mut(book, name)?;
    record.set_birthday(Birthday::parse(raw_birthday)?);
    Ok(Reply::text("Birthday added."))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<Reply> {
    let [name] = take_args::<1>(args, "show-birthday <name>")?;
    let record = find_record(book, name)?;

    match record.birthday() {
        Some(birthday) => Ok(Reply::text(birthday.to_string())),
        None => Ok(Reply::text("Contact has no birthday.")),
    }
}

/// `birthdays`: contacts to congratulate within the configured window.
pub fn upcoming_birthdays(book: &AddressBook, ctx: &Context) -> BookResult<Reply> {
    let upcoming = book.upcoming_birthdays_within(ctx.today, ctx.birthday_window_days);
    if upcoming.is_empty() {
        return Ok(Reply::text("No upcoming birthdays."));
    }

    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(Reply::text(lines.join("\n")))
}
