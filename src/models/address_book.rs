//! The address book: every contact record, keyed by name.

use super::record::Record;
use super::upcoming::{self, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Collection of contact records keyed by name.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps that name's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any existing record.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
        }
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order.iter().filter_map(move |name| {
            self.records
                .get(name)
                .map(|record| (name.as_str(), record))
        })
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.iter().map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate within the next seven days of `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate within `window_days` of `today`.
    ///
    /// Results follow insertion order, not date order. Records without a
    /// birthday are skipped.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u64,
    ) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = upcoming::schedule(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect()
    }
}

// Serde support - a book is stored as the ordered list of its records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
