//! Preset hero appearances (`engine/hero_options.json`)
//!
//! ```json
//! { "options": [
//!     { "index": 0, "base": "male", "head": "head_short",
//!       "portrait": "images/portraits/male01.png", "name": "Matthew" }
//! ] }
//! ```

use super::{read_json, ConfigError};
use crate::messages::MessageCatalog;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highest option index accepted from the file
pub const MAX_OPTION_INDEX: usize = 1023;

/// A body/head/portrait bundle with a default hero name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroOption {
    pub base: String,
    pub head: String,
    pub portrait: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct HeroOptionEntry {
    index: i64,
    #[serde(default)]
    base: String,
    #[serde(default)]
    head: String,
    #[serde(default)]
    portrait: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct HeroOptionsFile {
    #[serde(default)]
    options: Vec<HeroOptionEntry>,
}

/// All preset hero options, indexed by id
///
/// Always holds at least one option, and every id in `all_options()` names
/// a slot in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroOptions {
    options: Vec<HeroOption>,
    all: Vec<usize>,
}

impl HeroOptions {
    /// Loads options, falling back to a single blank option on error
    pub fn load(path: &Path, messages: &MessageCatalog) -> Self {
        match read_json::<HeroOptionsFile>(path) {
            Ok(file) => {
                let options = Self::from_entries(file.options, messages);
                debug!(
                    "Loaded {} hero options ({} table slots) from {}",
                    options.all.len(),
                    options.slot_count(),
                    path.display()
                );
                options
            }
            Err(e) => {
                error!("{}", e);
                Self::from_entries(Vec::new(), messages)
            }
        }
    }

    pub fn from_json_str(json: &str, messages: &MessageCatalog) -> Result<Self, ConfigError> {
        let file: HeroOptionsFile =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: "hero_options.json".into(),
                source,
            })?;
        Ok(Self::from_entries(file.options, messages))
    }

    fn from_entries(entries: Vec<HeroOptionEntry>, messages: &MessageCatalog) -> Self {
        let mut options: Vec<HeroOption> = Vec::new();
        let mut all = Vec::new();

        for entry in entries {
            let index = entry.index.max(0) as usize;
            if index > MAX_OPTION_INDEX {
                warn!(
                    "Skipping hero option {}: index above {}",
                    entry.index, MAX_OPTION_INDEX
                );
                continue;
            }
            if index >= options.len() {
                options.resize(index + 1, HeroOption::default());
            }

            options[index] = HeroOption {
                base: entry.base,
                head: entry.head,
                portrait: entry.portrait,
                name: messages.get(&entry.name),
            };
            all.push(index);
        }

        if options.is_empty() {
            options.push(HeroOption::default());
        }
        if all.is_empty() {
            all.push(0);
        }
        all.sort_unstable();

        HeroOptions { options, all }
    }

    pub fn get(&self, id: usize) -> Option<&HeroOption> {
        self.options.get(id)
    }

    /// Every defined option id, ascending
    pub fn all_options(&self) -> &[usize] {
        &self.all
    }

    /// Size of the id-indexed table, gaps included
    pub fn slot_count(&self) -> usize {
        self.options.len()
    }
}

impl Default for HeroOptions {
    fn default() -> Self {
        Self::from_entries(Vec::new(), &MessageCatalog::empty())
    }
}
