//! Command shell
//!
//! This module turns lines of text into address book operations and their
//! results back into localized text.

pub mod boundary;
pub mod commands;
pub mod messages;
pub mod shell;

pub use boundary::render_error;
pub use commands::{parse_input, Command, COMMANDS};
pub use messages::Messages;
pub use shell::{Reply, Shell};
