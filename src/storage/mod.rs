//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::book::ContactStore;
use crate::config::paths::ContactPaths;
use crate::error::ContactError;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContactPaths) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Load the address book from disk
    pub fn load(&self) -> Result<ContactStore, ContactError> {
        self.contacts.load()
    }

    /// Save the address book to disk
    pub fn save(&self, store: &ContactStore) -> Result<(), ContactError> {
        self.contacts.save(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut store = ContactStore::new();
        store.add_record(crate::models::Record::new("Zoe").unwrap());
        storage.save(&store).unwrap();

        assert!(storage.paths().contacts_file().exists());
        assert_eq!(storage.load().unwrap(), store);
    }
}
