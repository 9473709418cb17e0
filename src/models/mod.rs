//! Core data models for the contact book
//!
//! Each field of a contact is its own validated value type; a [`Record`]
//! groups them for one person.

pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{validate_birthday, Birthday, BIRTHDAY_FORMAT};
pub use name::{validate_name, Name};
pub use phone::{validate_phone, Phone};
pub use record::Record;
