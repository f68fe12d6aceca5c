// SPDX-License-Identifier: MPL-2.0
//! File-backed preference store using CBOR format.
//!
//! Preferences are application-managed values (the chosen language) rather
//! than user-edited settings, so they live in the data directory next to
//! other state instead of in `settings.toml`.
//!
//! A missing file is an empty store. An unreadable or corrupted file is also
//! an empty store, reported through a notification key so the caller can
//! surface it; the next successful write replaces it.

use super::paths;
use crate::application::port::PreferenceStore;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Preferences file name within the app data directory.
const PREFERENCES_FILE: &str = "preferences.cbor";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePreferences {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Loads preferences from the default data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads preferences from `base_dir`, or the default data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(PREFERENCES_FILE));
        let Some(file_path) = path.as_deref() else {
            return (Self::default(), None);
        };
        if !file_path.exists() {
            return (Self { path, values: BTreeMap::new() }, None);
        }

        match read_values(file_path) {
            Ok(values) => (Self { path, values }, None),
            Err(warning) => {
                tracing::warn!(path = %file_path.display(), warning, "discarding stored preferences");
                (Self { path, values: BTreeMap::new() }, Some(warning.to_string()))
            }
        }
    }

    /// Location written by [`PreferenceStore::set`], if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.values, &mut writer).map_err(|err| Error::Preferences(err.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

fn read_values(path: &Path) -> std::result::Result<BTreeMap<String, String>, &'static str> {
    let file = fs::File::open(path).map_err(|_| "notifications.preferences-read-error")?;
    ciborium::from_reader(BufReader::new(file)).map_err(|_| "notifications.preferences-parse-error")
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
