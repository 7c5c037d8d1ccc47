//! Theme toggle tests
//!
//! Page-ready application of the stored preference and the click
//! round trip between the page and the store.

use pageread::dom::{Document, MemoryDocument};
use pageread::store::{MemoryStore, PreferenceStore};
use pageread::theme::{ThemePreference, ThemeSettings, ThemeToggle};
use pageread::{PagereadError, Result};

/// Store whose writes always fail
struct ReadOnlyStore(MemoryStore);

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(PagereadError::Store("quota exceeded".into()))
    }
}

/// Store whose reads always fail
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(PagereadError::Store("unreadable".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

fn page_with_toggle() -> MemoryDocument {
    MemoryDocument::new().with_element("theme-toggle", "Toggle theme")
}

#[test]
fn test_stored_dark_applies_dark() {
    let store = MemoryStore::new().with("theme", "dark");
    let mut doc = page_with_toggle();

    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);

    assert!(doc.root_has_class("dark"));
    assert_eq!(toggle.current(&doc), ThemePreference::Dark);
}

#[test]
fn test_anything_but_dark_loads_light() {
    for saved in [None, Some("light"), Some("Dark"), Some("DARK"), Some(""), Some("dark ")] {
        let store = match saved {
            Some(value) => MemoryStore::new().with("theme", value),
            None => MemoryStore::new(),
        };
        let mut doc = page_with_toggle();

        let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);

        assert!(!doc.root_has_class("dark"), "stored {:?} should load light", saved);
        assert_eq!(toggle.current(&doc), ThemePreference::Light);
    }
}

#[test]
fn test_unreadable_store_loads_light() {
    let mut doc = page_with_toggle();
    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &BrokenStore, &mut doc);
    assert_eq!(toggle.current(&doc), ThemePreference::Light);
}

#[test]
fn test_click_persists_new_mode() {
    let mut store = MemoryStore::new();
    let mut doc = page_with_toggle();
    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);

    assert_eq!(toggle.click(&mut store, &mut doc).unwrap(), Some(ThemePreference::Dark));
    assert!(doc.root_has_class("dark"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    assert_eq!(toggle.click(&mut store, &mut doc).unwrap(), Some(ThemePreference::Light));
    assert!(!doc.root_has_class("dark"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn test_repeated_toggles_stay_in_sync() {
    let mut store = MemoryStore::new();
    let mut doc = page_with_toggle();
    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);

    for n in 1..=9 {
        let pref = toggle.click(&mut store, &mut doc).unwrap().unwrap();
        let expected = if n % 2 == 1 {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };

        assert_eq!(pref, expected, "after {} toggles", n);
        assert_eq!(toggle.current(&doc), expected);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn test_missing_control_is_inert() {
    let mut store = MemoryStore::new().with("theme", "dark");
    let mut doc = MemoryDocument::new();
    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);

    // Stored preference still applies without a control
    assert!(doc.root_has_class("dark"));
    assert!(!toggle.is_bound());

    assert_eq!(toggle.click(&mut store, &mut doc).unwrap(), None);
    assert!(doc.root_has_class("dark"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_failed_write_reverts_flip() {
    let mut store = ReadOnlyStore(MemoryStore::new().with("theme", "dark"));
    let mut doc = page_with_toggle();
    let toggle = ThemeToggle::on_page_ready(ThemeSettings::default(), &store, &mut doc);
    assert!(doc.root_has_class("dark"));

    let result = toggle.click(&mut store, &mut doc);

    assert!(matches!(result, Err(PagereadError::Store(_))));
    assert!(doc.root_has_class("dark"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_custom_settings() {
    let settings = ThemeSettings {
        storage_key: "site-theme".to_string(),
        toggle_id: "mode-switch".to_string(),
        dark_class: "night".to_string(),
    };
    let mut store = MemoryStore::new().with("site-theme", "dark");
    let mut doc = MemoryDocument::new().with_element("mode-switch", "");

    let toggle = ThemeToggle::on_page_ready(settings, &store, &mut doc);
    assert!(doc.root_has_class("night"));
    assert!(!doc.root_has_class("dark"));

    toggle.click(&mut store, &mut doc).unwrap();
    assert!(!doc.root_has_class("night"));
    assert_eq!(store.get("site-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(store.get("theme").unwrap(), None);
}
