//! Error translation at the command boundary
//!
//! Every failure coming out of a command ends here and becomes one localized
//! line of text. Nothing below this point prints.

use super::messages::Messages;
use crate::error::{ContactError, ValidationError};

/// Turn an error into the message shown to the user
pub fn render_error(err: &ContactError, messages: &Messages) -> String {
    match err {
        ContactError::Validation(validation) => render_validation(validation, messages),
        ContactError::NotFound { entity_type, .. } if *entity_type == "Phone" => {
            messages.phone_not_found.to_string()
        }
        ContactError::NotFound { .. } => messages.contact_not_found.to_string(),
        other => format!("{} {}", messages.generic_error, other),
    }
}

/// A command's success message followed by the save failure
///
/// The command itself already took effect in memory; only the write failed.
pub fn render_save_error(message: &str, err: &ContactError, messages: &Messages) -> String {
    format!("{}\n{} {}", message, messages.save_failed, err)
}

fn render_validation(err: &ValidationError, messages: &Messages) -> String {
    match err {
        ValidationError::EmptyName => messages.empty_name.to_string(),
        ValidationError::InvalidPhone(_) => messages.invalid_phone.to_string(),
        ValidationError::InvalidBirthday(_) => messages.invalid_birthday.to_string(),
        ValidationError::MissingArguments { usage, .. } => {
            format!("{} {}", messages.missing_arguments, usage)
        }
    }
}
