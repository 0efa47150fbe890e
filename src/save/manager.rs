//! Save manager for the hero save slots
//!
//! This module provides the SaveManager struct which handles:
//! - Selecting the active save slot
//! - Writing the hero to the active slot
//! - Loading and listing slots

use super::types::*;
use crate::avatar::Avatar;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub struct SaveManager {
    save_directory: PathBuf,
    game_slot: u8,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            game_slot: FIRST_SLOT,
        })
    }

    /// Sets the active save slot, clamped to the valid range
    pub fn set_game_slot(&mut self, slot: u8) {
        self.game_slot = slot.clamp(FIRST_SLOT, LAST_SLOT);
        debug!("Active save slot: {}", self.game_slot);
    }

    pub fn game_slot(&self) -> u8 {
        self.game_slot
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.save_directory.join(format!("slot_{}.json", slot))
    }

    /// Writes `hero` to the active slot
    pub fn save_game(&self, hero: &Avatar) -> Result<PathBuf, SaveError> {
        let save_file = SaveFile {
            version: CURRENT_SAVE_VERSION,
            timestamp: SystemTime::now(),
            metadata: SaveMetadata {
                game_version: env!("CARGO_PKG_VERSION").to_string(),
                player_name: hero.name.clone(),
                class_name: hero.class_name.clone(),
                permadeath: hero.permadeath,
                save_slot: self.game_slot,
                saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
            hero: hero.clone(),
        };

        let filepath = self.slot_path(self.game_slot);
        let json = serde_json::to_string_pretty(&save_file)?;
        fs::write(&filepath, json)?;

        info!("Game saved to: {}", filepath.display());
        Ok(filepath)
    }

    /// Load the save in `slot`
    pub fn load_game(&self, slot: u8) -> Result<SaveFile, SaveError> {
        let filepath = self.slot_path(slot);
        if !filepath.exists() {
            return Err(SaveError::EmptySlot(slot));
        }

        let json = fs::read_to_string(&filepath)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        if save_file.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(save_file.version));
        }

        Ok(save_file)
    }

    /// Check if a save file exists for a given slot
    pub fn save_exists(&self, slot: u8) -> bool {
        self.slot_path(slot).exists()
    }

    /// Hero name stored in every slot, `None` for empty or unreadable slots
    pub fn list_slots(&self) -> Vec<(u8, Option<String>)> {
        (FIRST_SLOT..=LAST_SLOT)
            .map(|slot| {
                let name = if self.save_exists(slot) {
                    match self.load_game(slot) {
                        Ok(save) => Some(save.metadata.player_name),
                        Err(e) => {
                            warn!("Ignoring save slot {}: {}", slot, e);
                            None
                        }
                    }
                } else {
                    None
                };
                (slot, name)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str) -> Avatar {
        let mut avatar = Avatar::new();
        avatar.name = name.to_string();
        avatar.gfx_base = "male".to_string();
        avatar
    }

    #[test]
    fn test_slot_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let mut saves = SaveManager::new(dir.path()).unwrap();

        saves.set_game_slot(0);
        assert_eq!(saves.game_slot(), 1);
        saves.set_game_slot(9);
        assert_eq!(saves.game_slot(), 5);
    }

    #[test]
    fn test_save_then_load_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut saves = SaveManager::new(dir.path().join("nested")).unwrap();
        saves.set_game_slot(3);

        saves.save_game(&hero("Ayla")).unwrap();
        assert!(saves.save_exists(3));

        let loaded = saves.load_game(3).unwrap();
        assert_eq!(loaded.metadata.save_slot, 3);
        assert_eq!(loaded.hero, hero("Ayla"));
    }

    #[test]
    fn test_list_slots_and_empty_slot_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut saves = SaveManager::new(dir.path()).unwrap();
        saves.set_game_slot(2);
        saves.save_game(&hero("Bram")).unwrap();
        fs::write(dir.path().join("slot_4.json"), "not json").unwrap();

        let slots = saves.list_slots();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[1], (2, Some("Bram".to_string())));
        assert_eq!(slots[3], (4, None));

        assert!(matches!(saves.load_game(1), Err(SaveError::EmptySlot(1))));
    }
}
