//! Configuration management

use crate::theme::ThemeSettings;
use crate::{PagereadError, Result};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Default page origin the preference store is scoped to
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Default id of the element read when `speak` gets no argument
pub const DEFAULT_SPEECH_TARGET: &str = "speak-target";

/// Application configuration
///
/// Names the page origin, the DOM ids and classes the components look for,
/// and where preferences are stored.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.pageread.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from ~/.pageread.cfg, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, writing defaults there if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(path)
                .map_err(|e| PagereadError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(path)
                .map_err(|e| PagereadError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| PagereadError::Config(format!("Failed to save config: {}", e)))
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get config file path (~/.pageread.cfg)
    fn config_path() -> PathBuf {
        Self::home_dir().join(".pageread.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("page")).set("origin", DEFAULT_ORIGIN);

        let theme = ThemeSettings::default();
        ini.with_section(Some("theme"))
            .set("storage_key", theme.storage_key)
            .set("toggle_id", theme.toggle_id)
            .set("dark_class", theme.dark_class);

        ini.with_section(Some("speech"))
            .set("target_id", DEFAULT_SPEECH_TARGET);

        ini.with_section(Some("store"));

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Origin the preference store is scoped to
    pub fn origin(&self) -> String {
        self.get_string("page", "origin", DEFAULT_ORIGIN)
    }

    /// Storage key, toggle control id and dark class
    pub fn theme(&self) -> ThemeSettings {
        let defaults = ThemeSettings::default();
        ThemeSettings {
            storage_key: self.get_string("theme", "storage_key", &defaults.storage_key),
            toggle_id: self.get_string("theme", "toggle_id", &defaults.toggle_id),
            dark_class: self.get_string("theme", "dark_class", &defaults.dark_class),
        }
    }

    /// Element read when `speak` is called without input
    pub fn speech_target(&self) -> String {
        self.get_string("speech", "target_id", DEFAULT_SPEECH_TARGET)
    }

    /// Preference store file (~/.pageread/storage.ini unless overridden)
    pub fn store_path(&self) -> PathBuf {
        match self.ini.get_from(Some("store"), "path") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::home_dir().join(".pageread").join("storage.ini"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_written_on_first_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pageread.cfg");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.origin(), DEFAULT_ORIGIN);
        assert_eq!(config.theme(), ThemeSettings::default());
        assert_eq!(config.speech_target(), DEFAULT_SPEECH_TARGET);
        assert!(config.store_path().ends_with("storage.ini"));
    }

    #[test]
    fn test_overrides_survive_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pageread.cfg");

        let mut config = Config::load_from(&path).unwrap();
        config.set("theme", "dark_class", "night");
        config.set("store", "path", "/tmp/prefs.ini");
        config.save().unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme().dark_class, "night");
        assert_eq!(config.theme().toggle_id, "theme-toggle");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/prefs.ini"));
    }
}
