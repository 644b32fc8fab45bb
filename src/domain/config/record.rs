//! Configuration record built for one run.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// One key/value pair and the feature that wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Write-once key/value record, grouped by feature in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigRecord {
    entries: Vec<ConfigEntry>,
    index: BTreeMap<String, usize>,
}

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Writing a key twice is a `DuplicateConfigKey` error.
    pub fn insert(&mut self, section: &str, key: &str, value: String) -> Result<(), AppError> {
        if let Some(&existing) = self.index.get(key) {
            return Err(AppError::DuplicateConfigKey {
                key: key.to_string(),
                feature: section.to_string(),
                first_feature: self.entries[existing].section.clone(),
            });
        }

        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push(ConfigEntry {
            section: section.to_string(),
            key: key.to_string(),
            value,
        });
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].value.as_str())
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Entries grouped by section, sections in order of first write.
    pub fn sections(&self) -> Vec<(&str, Vec<&ConfigEntry>)> {
        let mut groups: Vec<(&str, Vec<&ConfigEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(name, _)| *name == entry.section) {
                Some((_, list)) => list.push(entry),
                None => groups.push((entry.section.as_str(), vec![entry])),
            }
        }
        groups
    }
}
