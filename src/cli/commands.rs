//! Shell command definitions and parsing
//!
//! A line is split on whitespace; the first token, lower-cased, selects the
//! command and the rest are its arguments. Extra arguments are ignored.

use crate::error::ValidationError;

/// A shell command with its description for `help`
#[derive(Debug, Clone)]
pub struct CommandInfo {
    /// Command name (what user types)
    pub name: &'static str,
    /// Usage line shown in help and in missing-argument errors
    pub usage: &'static str,
}

/// All available commands, in help order
pub static COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "hello",
        usage: "hello",
    },
    CommandInfo {
        name: "add",
        usage: "add NAME PHONE",
    },
    CommandInfo {
        name: "change",
        usage: "change NAME OLD_PHONE NEW_PHONE",
    },
    CommandInfo {
        name: "phone",
        usage: "phone NAME",
    },
    CommandInfo {
        name: "remove-phone",
        usage: "remove-phone NAME PHONE",
    },
    CommandInfo {
        name: "delete",
        usage: "delete NAME",
    },
    CommandInfo {
        name: "all",
        usage: "all",
    },
    CommandInfo {
        name: "add-birthday",
        usage: "add-birthday NAME DD.MM.YYYY",
    },
    CommandInfo {
        name: "show-birthday",
        usage: "show-birthday NAME",
    },
    CommandInfo {
        name: "birthdays",
        usage: "birthdays",
    },
    CommandInfo {
        name: "help",
        usage: "help",
    },
    CommandInfo {
        name: "close",
        usage: "close | exit",
    },
];

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a raw input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, ValidationError>> {
        let (command, args) = parse_input(line)?;
        Some(Self::from_parts(&command, &args))
    }

    /// Build a command from its lower-cased name and arguments
    pub fn from_parts(command: &str, args: &[&str]) -> Result<Self, ValidationError> {
        let command = match command {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = require::<2>(args, "add")?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = require::<3>(args, "change")?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = require::<1>(args, "phone")?;
                Self::Phone { name }
            }
            "remove-phone" => {
                let [name, phone] = require::<2>(args, "remove-phone")?;
                Self::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = require::<1>(args, "delete")?;
                Self::Delete { name }
            }
            "all" => Self::All,
            "add-birthday" => {
                let [name, birthday] = require::<2>(args, "add-birthday")?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = require::<1>(args, "show-birthday")?;
                Self::ShowBirthday { name }
            }
            "birthdays" => Self::Birthdays,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        };
        Ok(command)
    }

    /// Whether running this command can change the address book
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Change { .. }
                | Self::RemovePhone { .. }
                | Self::Delete { .. }
                | Self::AddBirthday { .. }
        )
    }
}

/// Split a line into a lower-cased command token and its arguments
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Usage line for a command name
pub fn usage(command: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|c| c.name == command)
        .map(|c| c.usage)
        .unwrap_or("")
}

fn require<const N: usize>(
    args: &[&str],
    command: &'static str,
) -> Result<[String; N], ValidationError> {
    if args.len() < N {
        return Err(ValidationError::MissingArguments {
            command,
            usage: usage(command),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
