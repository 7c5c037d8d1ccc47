//! Page document access
//!
//! Components never reach for an ambient document. They are handed a
//! `Document` for the duration of each call, which lets the CLI load a page
//! from disk and lets tests build one in memory.

use crate::{PagereadError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// The slice of a page DOM the components consume
pub trait Document {
    /// Whether an element with this id exists
    fn has_element(&self, id: &str) -> bool;

    /// Rendered text of the element with this id, untrimmed
    fn element_text(&self, id: &str) -> Option<String>;

    /// Whether the root presentation scope carries `class`
    fn root_has_class(&self, class: &str) -> bool;

    /// Add `class` to the root presentation scope
    fn add_root_class(&mut self, class: &str);

    /// Remove `class` from the root presentation scope
    fn remove_root_class(&mut self, class: &str);

    /// Flip `class` on the root and return whether it is now present
    fn toggle_root_class(&mut self, class: &str) -> bool {
        if self.root_has_class(class) {
            self.remove_root_class(class);
            false
        } else {
            self.add_root_class(class);
            true
        }
    }
}

/// On-disk page description
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct PageFile {
    #[serde(default)]
    root_classes: Vec<String>,
    #[serde(default)]
    elements: HashMap<String, String>,
}

/// In-memory document: a set of root classes and a map of element id to
/// rendered text
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    root_classes: BTreeSet<String>,
    elements: HashMap<String, String>,
}

impl MemoryDocument {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style element insertion
    pub fn with_element(mut self, id: &str, text: &str) -> Self {
        self.insert_element(id, text);
        self
    }

    /// Insert or replace an element
    pub fn insert_element(&mut self, id: &str, text: &str) {
        self.elements.insert(id.to_string(), text.to_string());
    }

    /// Remove an element, returning its text
    pub fn remove_element(&mut self, id: &str) -> Option<String> {
        self.elements.remove(id)
    }

    /// Root classes in sorted order
    pub fn root_classes(&self) -> impl Iterator<Item = &str> {
        self.root_classes.iter().map(String::as_str)
    }

    /// Parse a page from its JSON description
    pub fn from_json(json: &str) -> Result<Self> {
        let page: PageFile = serde_json::from_str(json)?;
        Ok(Self {
            root_classes: page.root_classes.into_iter().collect(),
            elements: page.elements,
        })
    }

    /// Load a page from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading page from {:?}", path);
        let json = std::fs::read_to_string(path).map_err(|e| {
            PagereadError::Page(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let doc = Self::from_json(&json)?;
        debug!(
            "Page has {} elements, {} root classes",
            doc.elements.len(),
            doc.root_classes.len()
        );
        Ok(doc)
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn element_text(&self, id: &str) -> Option<String> {
        self.elements.get(id).cloned()
    }

    fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    fn add_root_class(&mut self, class: &str) {
        self.root_classes.insert(class.to_string());
    }

    fn remove_root_class(&mut self, class: &str) {
        self.root_classes.remove(class);
    }
}
