//! Upcoming birthday scheduling.
//!
//! Works out when each contact should be congratulated: the next
//! anniversary of the birthday on or after a reference date, moved to the
//! following Monday if it lands on a weekend.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Default lookahead window in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// A contact whose birthday falls within the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date the contact should be congratulated on (never a weekend)
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Next anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.in_year(today.year())?;
    if this_year < today {
        return birthday.in_year(today.year() + 1);
    }
    Some(this_year)
}

/// Shift Saturday and Sunday forward to the following Monday.
pub fn congratulation_date(upcoming: NaiveDate) -> NaiveDate {
    let weekday = upcoming.weekday().number_from_monday();
    if weekday > 5 {
        return upcoming + Days::new(u64::from(8 - weekday));
    }
    upcoming
}

/// Congratulation date for `birthday`, or `None` when the next anniversary
/// is more than `window_days` after `today`.
pub fn schedule(birthday: &Birthday, today: NaiveDate, window_days: u64) -> Option<NaiveDate> {
    let upcoming = next_occurrence(birthday, today)?;
    let horizon = today.checked_add_days(Days::new(window_days))?;
    if upcoming > horizon {
        return None;
    }
    Some(congratulation_date(upcoming))
}
