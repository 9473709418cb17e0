//! Contact display formatting
//!
//! Formats records, phone lists and upcoming birthdays for terminal output.

use crate::book::{ContactStore, UpcomingBirthday};
use crate::cli::messages::Messages;
use crate::models::{Record, BIRTHDAY_FORMAT};

/// One line per contact, or the no-contacts message
pub fn format_contact_list(store: &ContactStore, messages: &Messages) -> String {
    if store.is_empty() {
        return messages.no_contacts.to_string();
    }

    store
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"{name}: {p1}; {p2}"`
pub fn format_phones(record: &Record) -> String {
    format!("{}: {}", record.name(), record.phones_joined())
}

/// The birthday as `DD.MM.YYYY`, or the not-set message
pub fn format_birthday(record: &Record, messages: &Messages) -> String {
    match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => messages.birthday_not_set.to_string(),
    }
}

/// `"{name}: DD.MM.YYYY"` per entry, or the none-upcoming message
pub fn format_upcoming(upcoming: &[UpcomingBirthday], messages: &Messages) -> String {
    if upcoming.is_empty() {
        return messages.no_upcoming_birthdays.to_string();
    }

    upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.date.format(BIRTHDAY_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}
