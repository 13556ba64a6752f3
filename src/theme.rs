//! Theme preference — the only state that survives across sessions.
//!
//! A single light/dark key, persisted as a small JSON file in the app
//! data directory. A missing or unreadable file falls back to the default
//! rather than failing: losing a theme toggle is not worth an error path
//! in the UI.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to persist theme preference: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode theme preference: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Self {
        Self::new(config::theme_path())
    }

    /// Load the saved preference; default on missing or corrupt file.
    pub fn load(&self) -> Theme {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Theme::default();
        };
        match serde_json::from_str::<ThemeFile>(&raw) {
            Ok(file) => file.theme,
            Err(e) => {
                tracing::warn!("Corrupt theme file, falling back to default: {e}");
                Theme::default()
            }
        }
    }

    /// Persist the preference, creating the data directory if needed.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&ThemeFile { theme })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join("prefs").join("theme.json"))
    }

    #[test]
    fn missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), Theme::Light);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(Theme::Dark).unwrap();
        std::fs::write(dir.path().join("prefs").join("theme.json"), "{not json").unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_variants() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(Theme::Dark).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("prefs").join("theme.json")).unwrap();
        assert!(raw.contains("\"dark\""));
    }
}
