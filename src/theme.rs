//! Light/dark theme toggle
//!
//! The persisted preference decides the page's visual mode at page-ready,
//! and every click on the toggle control flips the mode and persists it.

use crate::dom::Document;
use crate::store::PreferenceStore;
use crate::Result;
use log::{debug, info, warn};
use std::fmt;

/// Default storage key for the preference
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Default id of the toggle control element
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Default root class that signals dark mode to stylesheets
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Persisted theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Interpret a stored value. Only the exact string `"dark"` is dark;
    /// anything else, including nothing, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    /// Value written to the store
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names the toggle relies on: storage key, control id and root class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    pub storage_key: String,
    pub toggle_id: String,
    pub dark_class: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}

/// Theme toggle bound to a page
///
/// Created by `on_page_ready`. When the page has no toggle control the
/// toggle is inert and `click` never does anything.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    settings: ThemeSettings,
    bound: bool,
}

impl ThemeToggle {
    /// Apply the persisted preference to the page and bind the control
    pub fn on_page_ready(
        settings: ThemeSettings,
        store: &dyn PreferenceStore,
        doc: &mut dyn Document,
    ) -> Self {
        let saved = match store.get(&settings.storage_key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read theme preference, using light: {}", e);
                None
            }
        };

        let pref = ThemePreference::from_stored(saved.as_deref());
        debug!("Stored theme {:?} -> {}", saved, pref);
        if pref.is_dark() {
            doc.add_root_class(&settings.dark_class);
        }

        let bound = doc.has_element(&settings.toggle_id);
        if !bound {
            debug!("No #{} control on page, toggle inert", settings.toggle_id);
        }

        Self { settings, bound }
    }

    /// Whether the page had a toggle control at page-ready
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Visual mode currently applied to the page
    pub fn current(&self, doc: &dyn Document) -> ThemePreference {
        if doc.root_has_class(&self.settings.dark_class) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Handle a click on the toggle control
    ///
    /// Returns the new preference, or `None` if the toggle is inert. If the
    /// store rejects the write the flip is undone, so page and store never
    /// disagree.
    pub fn click(
        &self,
        store: &mut dyn PreferenceStore,
        doc: &mut dyn Document,
    ) -> Result<Option<ThemePreference>> {
        if !self.bound {
            return Ok(None);
        }

        let is_dark = doc.toggle_root_class(&self.settings.dark_class);
        let pref = if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };

        if let Err(e) = store.set(&self.settings.storage_key, pref.as_str()) {
            doc.toggle_root_class(&self.settings.dark_class);
            return Err(e);
        }

        info!("Theme switched to {}", pref);
        Ok(Some(pref))
    }
}
