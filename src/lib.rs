//! Contact Book - a command-line contact manager.
//!
//! This library stores contacts (name, phone numbers, birthday) in memory,
//! persists them between runs and drives a line-oriented command interpreter.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: Contact records, the address book and birthday scheduling
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Whole-book persistence (JSON file)
//! - **cli**: Input tokenizer, command handlers and the REPL

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use cli::{Context, Interpreter};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileBookRepository};
