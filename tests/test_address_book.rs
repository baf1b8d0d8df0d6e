//! Behavioural tests for the address book and birthday scheduling.

use chrono::NaiveDate;
use contact_book::{AddressBook, Birthday, BookError, Phone, Record, ValidationError};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn contact(name: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    if let Some(raw) = birthday {
        record.set_birthday(Birthday::parse(raw).unwrap());
    }
    record
}

#[test]
fn test_phone_accepts_only_ten_digits() {
    for valid in ["1234567890", "0000000000", "9876543210"] {
        assert_eq!(Phone::new(valid).unwrap().as_str(), valid);
    }

    let invalid_inputs = [
        "",
        "123456789",
        "12345678901",
        "(123)456789",
        "123 456 7890",
        "abcdefghij",
    ];
    for invalid in invalid_inputs {
        assert_eq!(
            Phone::new(invalid),
            Err(ValidationError::InvalidPhone(invalid.to_string())),
            "{:?} should be rejected",
            invalid
        );
    }
}

#[test]
fn test_birthday_parsing() {
    assert!(Birthday::parse("29.02.2020").is_ok());
    assert!(Birthday::parse("31.12.1999").is_ok());
    assert!(Birthday::parse("31.02.2020").is_err());
    assert!(Birthday::parse("15/03/2020").is_err());
}

#[test]
fn test_record_phone_lifecycle() {
    let mut record = Record::new("Alice").unwrap();
    record.add_phone("1234567890").unwrap();
    assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");

    record.remove_phone("1234567890");
    assert!(record.find_phone("1234567890").is_none());
}

#[test]
fn test_book_add_then_delete() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    book.delete("Alice");
    assert!(book.find("Alice").is_none());
}

#[test]
fn test_weekend_birthday_moves_to_monday() {
    let mut book = AddressBook::new();
    book.add_record(contact("Alice", Some("15.06.2024")));

    let upcoming = book.upcoming_birthdays(ymd(2024, 6, 10));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Alice");
    assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
}

#[test]
fn test_birthday_beyond_week_is_excluded() {
    let mut book = AddressBook::new();
    book.add_record(contact("Alice", Some("20.06.2024")));
    assert!(book.upcoming_birthdays(ymd(2024, 6, 10)).is_empty());
}

#[test]
fn test_passed_birthday_rolls_into_next_year() {
    let mut book = AddressBook::new();
    book.add_record(contact("Alice", Some("01.06.1990")));
    assert!(book.upcoming_birthdays(ymd(2024, 6, 10)).is_empty());

    // Late May of the following year brings it back into the window
    let upcoming = book.upcoming_birthdays(ymd(2025, 5, 28));
    assert_eq!(upcoming[0].formatted_date(), "02.06.2025");
}

#[test]
fn test_mixed_book() {
    let mut book = AddressBook::new();
    book.add_record(contact("NoBirthday", None));
    book.add_record(contact("Sunday", Some("16.06.1970")));
    book.add_record(contact("Wednesday", Some("12.06.2001")));
    book.add_record(contact("NextMonth", Some("12.07.2001")));
    book.add_record(contact("Today", Some("10.06.1999")));

    let lines: Vec<String> = book
        .upcoming_birthdays(ymd(2024, 6, 10))
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        vec![
            "Sunday - 17.06.2024",
            "Wednesday - 12.06.2024",
            "Today - 10.06.2024",
        ]
    );
}

#[test]
fn test_leap_day_birthday_policy() {
    let mut book = AddressBook::new();
    book.add_record(contact("Leapling", Some("29.02.2000")));

    // 2025 has no February 29; Friday the 28th is used instead
    let upcoming = book.upcoming_birthdays(ymd(2025, 2, 22));
    assert_eq!(upcoming[0].formatted_date(), "28.02.2025");

    // 2028 is a leap year; 29.02.2028 is a Tuesday
    let upcoming = book.upcoming_birthdays(ymd(2028, 2, 26));
    assert_eq!(upcoming[0].formatted_date(), "29.02.2028");
}

#[test]
fn test_validation_errors_convert_to_book_errors() {
    let err: BookError = Birthday::parse("32.01.2020").unwrap_err().into();
    assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
}
