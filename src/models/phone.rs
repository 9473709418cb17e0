//! Phone number model
//!
//! A phone number is stored exactly as typed. The only accepted shape is ten
//! ASCII digits; separators, country prefixes and spaces are rejected rather
//! than normalized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

/// A validated ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validate and create a phone number
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidPhone(s.to_string()))
        }
    }

    /// Check whether a raw string is a valid phone number
    pub fn is_valid(s: &str) -> bool {
        s.len() == PHONE_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the raw phone value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// Validate a phone number
pub fn validate_phone(s: &str) -> Result<Phone, ValidationError> {
    Phone::parse(s)
}
