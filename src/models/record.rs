//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction. Phones keep the order in which they
/// were added and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// First phone whose value equals `value` exactly.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == value)
    }

    /// Remove the first phone equal to `value`. Absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(index) = self.phones.iter().position(|phone| phone == value) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The replacement is validated like any other phone; if it is invalid
    /// the record is left untouched. A missing `old` value is a no-op.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = Phone::new(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|phone| *phone == old) {
            *slot = replacement;
        }
        Ok(())
    }

    /// Set the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
