//! User settings for the contact book
//!
//! Manages user preferences: message language, the birthday window length,
//! and whether changes are saved after every command.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::ContactPaths;
use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::ContactError;

/// Language of user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// Ukrainian
    Uk,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Uk => write!(f, "uk"),
        }
    }
}

impl FromStr for Locale {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "uk" | "ua" | "ukrainian" => Ok(Self::Uk),
            other => Err(ContactError::Config(format!("Unknown locale: {}", other))),
        }
    }
}

/// Longest accepted birthday window; every anniversary falls inside a year
pub const MAX_WINDOW_DAYS: u32 = 366;

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Language for shell messages
    #[serde(default)]
    pub locale: Locale,

    /// Length of the upcoming-birthday window in days, today included
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Save the contact book after every mutating command
    #[serde(default = "default_save_on_change")]
    pub save_on_change: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_save_on_change() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            birthday_window_days: default_birthday_window_days(),
            save_on_change: default_save_on_change(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ContactError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the shell cannot work with
    pub fn validate(&self) -> Result<(), ContactError> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.birthday_window_days) {
            return Err(ContactError::Config(format!(
                "birthday_window_days must be between 1 and {}",
                MAX_WINDOW_DAYS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.birthday_window_days, 7);
        assert!(settings.save_on_change);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::Uk;
        settings.birthday_window_days = 14;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::Uk);
        assert_eq!(loaded.birthday_window_days, 14);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale":"uk"}"#).unwrap();
        assert_eq!(settings.locale, Locale::Uk);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.birthday_window_days, 7);
        assert!(settings.save_on_change);
    }

    #[test]
    fn test_zero_window_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"birthday_window_days":0}"#).unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ContactError::Config(_))
        ));
    }

    #[test]
    fn test_oversized_window_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"birthday_window_days":4294967295}"#,
        )
        .unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ContactError::Config(_))
        ));

        std::fs::write(paths.settings_file(), r#"{"birthday_window_days":366}"#).unwrap();
        assert_eq!(
            Settings::load_or_create(&paths).unwrap().birthday_window_days,
            366
        );
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ua".parse::<Locale>().unwrap(), Locale::Uk);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Uk.to_string(), "uk");
    }
}
