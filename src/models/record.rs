//! Contact record model
//!
//! A record owns a contact's name, the ordered list of their phone numbers,
//! and an optional birthday. The name never changes after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::name::Name;
use super::phone::Phone;
use crate::error::{ContactError, ContactResult, ValidationError};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phones in the order they were added; duplicates are kept
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been set
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::parse(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if none match.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position
    ///
    /// The record is left untouched if `old` is missing or `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::phone_not_found(old))?;

        self.phones[index] = Phone::parse(new)?;
        Ok(())
    }

    /// Look up a phone by its raw value
    pub fn find_phone(&self, phone: &str) -> Option<&str> {
        self.phones
            .iter()
            .find(|p| p.as_str() == phone)
            .map(Phone::as_str)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
