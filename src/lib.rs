//! Contact Book - interactive command-line address book
//!
//! This library provides the core functionality for the contact book: validated
//! contact records, the name-keyed store with its upcoming-birthday query, JSON
//! persistence, and the command shell that drives them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Validated value types (name, phone, birthday) and the contact record
//! - `book`: The address book and the upcoming-birthday window
//! - `error`: Custom error types
//! - `config`: Configuration and path management
//! - `storage`: JSON file storage layer
//! - `display`: Text formatting for contacts and birthdays
//! - `cli`: Command parsing, the interactive shell, and error translation
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use contact_book::book::ContactStore;
//! use contact_book::models::Record;
//!
//! let mut record = Record::new("John").unwrap();
//! record.add_phone("1234567890").unwrap();
//! record.add_birthday("03.06.1990").unwrap();
//!
//! let mut store = ContactStore::new();
//! store.add_record(record);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert_eq!(store.upcoming_birthdays(today).len(), 1);
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use book::ContactStore;
pub use error::{ContactError, ContactResult, ValidationError};
pub use models::Record;
