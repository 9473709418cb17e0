//! Contact repository for JSON storage
//!
//! Snapshots the whole address book to contacts.json and rebuilds it on load.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::book::ContactStore;
use crate::error::ContactError;
use crate::models::Record;

use super::file_io::{read_json, write_json_atomic};

/// Serializable contact data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactData {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Repository for contact persistence
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The snapshot file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the address book, or an empty one if nothing was saved yet
    ///
    /// Every name, phone and birthday is re-validated while parsing.
    pub fn load(&self) -> Result<ContactStore, ContactError> {
        let data: ContactData = read_json(&self.path)?;
        let store: ContactStore = data.contacts.into_iter().collect();
        info!(count = store.len(), path = %self.path.display(), "loaded contacts");
        Ok(store)
    }

    /// Save the whole address book, preserving insertion order
    pub fn save(&self, store: &ContactStore) -> Result<(), ContactError> {
        let data = ContactData {
            contacts: store.iter().cloned().collect(),
        };
        write_json_atomic(&self.path, &data)?;
        debug!(count = store.len(), "saved contacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ContactRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.json");
        let repo = ContactRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_store() -> ContactStore {
        let mut store = ContactStore::new();

        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_birthday("03.06.1990").unwrap();
        store.add_record(john);

        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("0501112233").unwrap();
        store.add_record(ann);

        store
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        let store = repo.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        let store = sample_store();

        repo.save(&store).unwrap();
        let reloaded = repo.load().unwrap();

        assert_eq!(reloaded, store);
        let names: Vec<_> = reloaded.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["John", "Ann"]);
    }

    #[test]
    fn test_invalid_snapshot_is_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"{"contacts":[{"name":"John","phones":["12ab"],"birthday":null}]}"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(ContactError::Storage(_))));
    }

    #[test]
    fn test_snapshot_format() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&sample_store()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["contacts"][0]["name"], "John");
        assert_eq!(raw["contacts"][0]["birthday"], "03.06.1990");
        assert_eq!(raw["contacts"][1]["birthday"], serde_json::Value::Null);
    }
}
