//! Message lookup for player-facing strings
//!
//! Every string shown to the player goes through [`MessageCatalog::get`].
//! The catalog is a flat JSON object of `"key": "translation"` pairs;
//! missing keys fall back to the key itself, so an empty catalog shows the
//! built-in English text.

use crate::config::{read_json, ConfigError};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog with no translations
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MessageCatalog {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let entries: HashMap<String, String> = read_json(path)?;
        debug!("Loaded {} messages from {}", entries.len(), path.display());
        Ok(MessageCatalog { entries })
    }

    /// Loads the catalog, or an empty one if the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("{}; using untranslated messages", e);
            Self::empty()
        })
    }

    /// Translation for `key`, or `key` itself
    pub fn get(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_key() {
        let messages = MessageCatalog::from_pairs([("Create", "Erstellen")]);
        assert_eq!(messages.get("Create"), "Erstellen");
        assert_eq!(messages.get("Cancel"), "Cancel");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, r#"{"Permadeath?": "Mort permanente ?"}"#).unwrap();

        let messages = MessageCatalog::load(&path);
        assert_eq!(messages.get("Permadeath?"), "Mort permanente ?");

        let missing = MessageCatalog::load(&dir.path().join("nope.json"));
        assert_eq!(missing.get("Permadeath?"), "Permadeath?");
    }
}
