//! Persisted translation map.
//!
//! The on-disk format is a flat JSON object of string to string, written
//! pretty-printed with sorted keys so repeated dumps of the same map are
//! byte-identical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationsError {
    #[error("Failed to serialize translations: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write translations to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read translations from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid translations file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type TranslationsResult<T> = Result<T, TranslationsError>;

/// Mapping from translation key to resolved value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: BTreeMap<String, String>,
}

impl TranslationMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> TranslationsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the map to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created. The write is not atomic: a
    /// failure part way through can leave a truncated file behind.
    pub fn write_to(&self, path: &Path) -> TranslationsResult<()> {
        let contents = self.to_json()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| TranslationsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, contents).map_err(|source| TranslationsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Load a map previously written by [`TranslationMap::write_to`].
    pub fn load_from(path: &Path) -> TranslationsResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TranslationsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| TranslationsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
