//! The address book
//!
//! [`ContactStore`] maps contact names to records and keeps them in the order
//! they were first added. Listing and the birthday query both follow that
//! order.

pub mod upcoming;

pub use upcoming::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use chrono::NaiveDate;

use crate::models::Record;

/// Name-keyed collection of contact records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: Vec<Record>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Stored names are trimmed, so lookups trim too
    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record, replacing any existing record with the same name
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by case-sensitive name, ignoring surrounding whitespace
    pub fn find(&self, name: &str) -> Option<&Record> {
        let index = self.position(name)?;
        self.records.get(index)
    }

    /// Find a record for in-place mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        self.records.get_mut(index)
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no contacts
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the 7 days starting at `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose birthday falls within `days` days starting at `today`
    ///
    /// Results follow insertion order, not date order.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = upcoming::anniversary_within(birthday, today, days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for ContactStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.add_record(record);
        }
        store
    }
}
