//! Data-driven configuration
//!
//! Menu layouts, preset heroes and engine rules are plain JSON files under
//! the data directory. Loaders log problems and fall back to defaults, so a
//! broken or missing file degrades the menu instead of aborting the game.

pub mod engine;
pub mod error;
pub mod hero_options;
pub mod layout;

pub use engine::{DeathPenalty, EngineSettings, HeroClass};
pub use error::ConfigError;
pub use hero_options::{HeroOption, HeroOptions};
pub use layout::NewGameLayout;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads and deserializes a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
