//! Data models for the contact book.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the scheduling of upcoming birthdays.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::Record;
pub use upcoming::UpcomingBirthday;
