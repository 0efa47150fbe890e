//! Save data types
//!
//! Save files are pretty-printed JSON produced with Serde.

use crate::avatar::Avatar;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use thiserror::Error;

/// The root save file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
    pub hero: Avatar,
}

/// Metadata about the save, readable without interpreting the hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub game_version: String,
    pub player_name: String,
    pub class_name: Option<String>,
    pub permadeath: bool,
    pub save_slot: u8,
    /// Local time of the save, for display
    pub saved_at: String,
}

/// Error types for save/load operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid save version: {0}")]
    InvalidVersion(u32),

    #[error("No save in slot {0}")]
    EmptySlot(u8),
}

/// Current save file version
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// Lowest and highest save slot numbers
pub const FIRST_SLOT: u8 = 1;
pub const LAST_SLOT: u8 = 5;
