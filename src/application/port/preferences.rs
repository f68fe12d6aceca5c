// SPDX-License-Identifier: MPL-2.0
//! Persisted preference store port.

use crate::error::Result;
use std::collections::BTreeMap;

/// Durable key-value storage surviving application restarts.
pub trait PreferenceStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, persisting it if the backend is durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Used by tests and by embedders that persist elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MemoryPreferences {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}
