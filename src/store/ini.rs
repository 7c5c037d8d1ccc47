//! File-backed preference store
//!
//! One INI file holds the storage of every origin; each origin gets its own
//! section. The file is rewritten on every `set` so a value survives the
//! process exiting right after a toggle.
//!
//! Origins are percent-encoded into section names: characters such as `[`,
//! `]`, `;` and `#` are INI syntax and would corrupt the shared file.

use super::PreferenceStore;
use crate::{PagereadError, Result};
use ini::Ini;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Persistent store for one origin, backed by an INI file shared between
/// origins
pub struct IniStore {
    ini: Ini,
    path: PathBuf,
    origin: String,
    /// Encoded section name for `origin`
    section: String,
}

/// Encode an origin as an INI section name. Unreserved URL characters pass
/// through; every other byte becomes `%XX`.
fn section_for(origin: &str) -> String {
    let mut section = String::with_capacity(origin.len());
    for byte in origin.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~:/".contains(&byte) {
            section.push(byte as char);
        } else {
            section.push_str(&format!("%{:02X}", byte));
        }
    }
    section
}

impl IniStore {
    /// Open the store for `origin`, creating an empty one if the file is
    /// missing. An unreadable file is treated as empty and replaced on the
    /// next write. The file itself is only created on the first write.
    pub fn open(path: &Path, origin: &str) -> Result<Self> {
        debug!("Opening preference store {:?} for origin {}", path, origin);

        let ini = if path.exists() {
            Ini::load_from_file(path).unwrap_or_else(|e| {
                warn!("Unreadable preference store {:?}, starting empty: {}", path, e);
                Ini::new()
            })
        } else {
            Ini::new()
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
            origin: origin.to_string(),
            section: section_for(origin),
        })
    }

    /// Origin this store is scoped to
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PagereadError::Store(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        self.ini
            .write_to_file(&self.path)
            .map_err(|e| PagereadError::Store(format!("Failed to write store: {}", e)))
    }
}

impl PreferenceStore for IniStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .ini
            .get_from(Some(self.section.as_str()), key)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        debug!("Store[{}] {} = {}", self.origin, key, value);
        self.ini
            .with_section(Some(self.section.as_str()))
            .set(key, value);
        self.flush()
    }
}
