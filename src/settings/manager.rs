//! Settings store for loading and saving user settings
//!
//! This module provides the SettingsStore struct which handles:
//! - Locating the per-user settings directory
//! - Saving settings to a pretty-printed JSON file
//! - Loading settings, falling back to defaults when none exist yet

use super::types::*;
use crate::error::{Result, UiError};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsStore {
    directory: PathBuf,
}

impl SettingsStore {
    /// Creates a store rooted at `directory`, creating it if needed
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }
        Ok(SettingsStore { directory })
    }

    /// `<config dir>/puno`, or `./settings` when the platform has none
    pub fn default_location() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("puno"))
            .unwrap_or_else(|| PathBuf::from("./settings"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(SETTINGS_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Writes the settings, returning the file path
    pub fn save(&self, settings: &UserSettings) -> Result<PathBuf> {
        let path = self.path();
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&path, json)?;
        log::info!("Settings saved to: {}", path.display());
        Ok(path)
    }

    /// Reads the settings; a missing file yields defaults
    pub fn load(&self) -> Result<UserSettings> {
        let path = self.path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(UserSettings::default());
            }
            Err(e) => return Err(UiError::Io(e)),
        };
        let mut settings: UserSettings = serde_json::from_str(&json)?;
        if settings.version > CURRENT_SETTINGS_VERSION {
            log::warn!(
                "Settings version {} is newer than {}, loading what we understand",
                settings.version,
                CURRENT_SETTINGS_VERSION
            );
            settings.version = CURRENT_SETTINGS_VERSION;
        }
        settings.game.clamp_to_ranges();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SettingsStore {
        let dir = std::env::temp_dir().join(format!("puno_ui_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        SettingsStore::new(&dir).unwrap()
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let store = temp_store("missing");
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), UserSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("save_load");
        let mut settings = UserSettings::default();
        settings.audio.bgm = 0.3;
        settings.game.hand_cards = 9;

        let path = store.save(&settings).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_hand_edited_values_are_clamped() {
        let store = temp_store("clamped");
        let json = r#"{
            "version": 1,
            "game": { "hand_cards": 4294967295, "extra_cards": false, "max_hp": 10, "score_goal": 700 }
        }"#;
        fs::write(store.path(), json).unwrap();

        let mut settings = store.load().unwrap();
        assert_eq!(settings.game.hand_cards, 15);
        assert_eq!(settings.game.max_hp, 50);
        assert_eq!(settings.game.score_goal, 700);
        assert!(!settings.game.extra_cards);

        settings.game.cycle_hand_cards();
        assert_eq!(settings.game.hand_cards, 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(UiError::Json(_))));
    }
}
