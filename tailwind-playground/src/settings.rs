//! Persisted settings: whether the onboarding tour was dismissed, and the
//! last saved document.
//!
//! Stored as one small JSON file. A missing file means first run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::DEFAULT_SOURCE;
use crate::error::{PlaygroundError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tour_dismissed: bool,
    pub saved_source: Option<String>,
}

impl Settings {
    /// The document a new session opens with.
    pub fn initial_source(&self) -> &str {
        self.saved_source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }
}

/// Load/save contract for [`Settings`] at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform data directory, e.g. `~/.local/share/tailwind-playground`
    /// on Linux. Falls back to the working directory when no home is known.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_location() -> Self {
        let dir = directories::ProjectDirs::from("dev", "runyourempire", "tailwind-playground")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".tailwind-playground"));
        Self::at(dir.join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Settings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(PlaygroundError::io(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|source| PlaygroundError::SettingsFormat {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but a broken file only costs a warning.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("{e}; starting with default settings");
            Settings::default()
        })
    }

    /// Write through a sibling temp file so a crash never leaves half a file.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PlaygroundError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(settings).map_err(|source| {
            PlaygroundError::SettingsFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| PlaygroundError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PlaygroundError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("nested/settings.json"));
        let settings = Settings {
            tour_dismissed: true,
            saved_source: Some("<b>x</b>".into()),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
        assert!(!dir.path().join("nested/settings.json.tmp").exists());
    }

    #[test]
    fn unknown_and_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"tour_dismissed": true, "theme": "dark"}"#).unwrap();
        let settings = SettingsStore::at(&path).load().unwrap();
        assert!(settings.tour_dismissed);
        assert_eq!(settings.saved_source, None);
    }

    #[test]
    fn malformed_file_is_an_error_but_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let store = SettingsStore::at(&path);
        assert!(matches!(store.load(), Err(PlaygroundError::SettingsFormat { .. })));
        assert_eq!(store.load_or_default(), Settings::default());
    }

    #[test]
    fn initial_source_falls_back_to_starter() {
        assert_eq!(Settings::default().initial_source(), DEFAULT_SOURCE);
    }
}
