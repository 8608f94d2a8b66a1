use crate::error::{AnnotateError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// In-memory translation catalog: a flat mapping from message key
/// (e.g. "invoice.labels.add_new") to its English text
///
/// Loaded once at startup and read-only for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Read and parse a catalog file
    ///
    /// The file must be a flat JSON object of string keys to string values.
    /// Anything else (nested objects, arrays, non-string values) is a parse
    /// error; there is no partial or fallback catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AnnotateError::catalog_read_error(path, e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| AnnotateError::catalog_parse_error(path, e.to_string()))
    }

    /// Look up the translation for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
