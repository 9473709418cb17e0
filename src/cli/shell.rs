//! Interactive command shell
//!
//! Reads one command per line, runs it against the address book and writes
//! the reply. Bad input never ends the session; only `close`/`exit` or end of
//! input do.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use super::boundary::{render_error, render_save_error};
use super::commands::{Command, COMMANDS};
use super::messages::Messages;
use crate::book::ContactStore;
use crate::config::Settings;
use crate::display;
use crate::error::{ContactError, ContactResult};
use crate::models::Record;
use crate::storage::Storage;

/// What the shell should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

/// The command loop and the address book it operates on
pub struct Shell {
    store: ContactStore,
    storage: Option<Storage>,
    settings: Settings,
    messages: &'static Messages,
    today: Option<NaiveDate>,
}

impl Shell {
    /// Create a shell over an in-memory store with no persistence
    pub fn new(store: ContactStore, settings: Settings) -> Self {
        Self {
            store,
            storage: None,
            messages: Messages::for_locale(settings.locale),
            settings,
            today: None,
        }
    }

    /// Save the store through `storage` after changes and on exit
    pub fn with_storage(mut self, storage: Storage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Pin the reference date for the birthday query
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The address book
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Consume the shell and return the address book
    pub fn into_store(self) -> ContactStore {
        self.store
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run the loop until `close`/`exit` or end of input, then save
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> ContactResult<()> {
        writeln!(output, "{}", self.messages.welcome)?;

        loop {
            write!(output, "{}", self.messages.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                break;
            }

            match self.handle_line(&line) {
                None => continue,
                Some(Reply::Continue(message)) => writeln!(output, "{}", message)?,
                Some(Reply::Exit(message)) => {
                    writeln!(output, "{}", message)?;
                    break;
                }
            }
        }

        self.persist()
    }

    /// Parse and run a single line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let command = match Command::parse(line)? {
            Ok(command) => command,
            Err(err) => {
                let err = ContactError::from(err);
                warn!(error = %err, "rejected command");
                return Some(Reply::Continue(render_error(&err, self.messages)));
            }
        };

        debug!(?command, "dispatching");
        if command == Command::Exit {
            return Some(Reply::Exit(self.messages.goodbye.to_string()));
        }

        let reply = match self.execute(&command) {
            Ok(message) if command.is_mutating() && self.settings.save_on_change => {
                match self.persist() {
                    Ok(()) => message,
                    Err(err) => {
                        error!(error = %err, "failed to save contacts");
                        render_save_error(&message, &err, self.messages)
                    }
                }
            }
            Ok(message) => message,
            Err(err) => {
                warn!(error = %err, "command failed");
                render_error(&err, self.messages)
            }
        };
        Some(Reply::Continue(reply))
    }

    /// Run a parsed command and return its success message
    pub fn execute(&mut self, command: &Command) -> ContactResult<String> {
        let messages = self.messages;

        let message = match command {
            Command::Hello => messages.greeting.to_string(),

            Command::Add { name, phone } => match self.store.find_mut(name) {
                Some(record) => {
                    record.add_phone(phone)?;
                    messages.contact_updated.to_string()
                }
                None => {
                    let mut record = Record::new(name)?;
                    record.add_phone(phone)?;
                    self.store.add_record(record);
                    messages.contact_added.to_string()
                }
            },

            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.record_mut(name)?.edit_phone(old_phone, new_phone)?;
                messages.phone_updated.to_string()
            }

            Command::Phone { name } => display::format_phones(self.record(name)?),

            Command::RemovePhone { name, phone } => {
                let record = self.record_mut(name)?;
                if record.find_phone(phone).is_none() {
                    return Err(ContactError::phone_not_found(phone.as_str()));
                }
                record.remove_phone(phone);
                messages.phone_removed.to_string()
            }

            Command::Delete { name } => {
                if !self.store.delete(name) {
                    return Err(ContactError::contact_not_found(name.as_str()));
                }
                messages.contact_deleted.to_string()
            }

            Command::All => display::format_contact_list(&self.store, messages),

            Command::AddBirthday { name, birthday } => {
                self.record_mut(name)?.add_birthday(birthday)?;
                messages.birthday_added.to_string()
            }

            Command::ShowBirthday { name } => {
                display::format_birthday(self.record(name)?, messages)
            }

            Command::Birthdays => {
                let upcoming = self
                    .store
                    .upcoming_birthdays_within(self.today(), self.settings.birthday_window_days);
                display::format_upcoming(&upcoming, messages)
            }

            Command::Help => help_text(messages),

            Command::Exit => messages.goodbye.to_string(),

            Command::Unknown(_) => messages.unknown_command.to_string(),
        };

        Ok(message)
    }

    fn record(&self, name: &str) -> ContactResult<&Record> {
        self.store
            .find(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.store
            .find_mut(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    fn persist(&self) -> ContactResult<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.store),
            None => Ok(()),
        }
    }
}

fn help_text(messages: &Messages) -> String {
    let mut text = messages.help_header.to_string();
    for info in COMMANDS {
        text.push_str("\n  ");
        text.push_str(info.usage);
    }
    text
}
