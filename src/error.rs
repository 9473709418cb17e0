//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field validation failures live in their own
//! enum so the command shell can translate each kind into a localized message.

use thiserror::Error;

/// Validation failures for user-supplied values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact name was empty or whitespace only
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Phone number is not exactly 10 digits
    #[error("Invalid phone number '{0}': must be exactly 10 digits")]
    InvalidPhone(String),

    /// Birthday does not match DD.MM.YYYY or is not a real date
    #[error("Invalid birthday '{0}': expected DD.MM.YYYY")]
    InvalidBirthday(String),

    /// A shell command was called without its required arguments
    #[error("Command '{command}' requires arguments: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },
}

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for names, phones and birthdays
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for phone numbers
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
