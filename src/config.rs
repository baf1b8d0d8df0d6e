//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::upcoming::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default location of the persisted address book.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Upper bound for the birthday lookahead window.
const MAX_WINDOW_DAYS: u64 = 366;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the address book is loaded from and saved to
    pub book_file: PathBuf,

    /// Days ahead to look for upcoming birthdays (default: 7)
    pub birthday_window_days: u64,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the address book file (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday lookahead in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let book_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_BOOK_FILE),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::Other(
                    "CONTACT_BOOK_FILE is not valid unicode".to_string(),
                ));
            }
        };

        let birthday_window_days =
            Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
