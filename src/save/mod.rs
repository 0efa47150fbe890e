//! Save/Load system
//!
//! - JSON save files (human-readable, debuggable)
//! - Five save slots, one hero per slot
//!
//! # Architecture
//!
//! - `types`: Save data structures and error types
//! - `manager`: SaveManager for slot selection and file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let mut saves = SaveManager::new(&settings.save_dir)?;
//! saves.set_game_slot(2);
//! saves.save_game(&avatar)?;
//! let loaded = saves.load_game(2)?;
//! ```

pub mod manager;
pub mod types;

pub use manager::SaveManager;
pub use types::*;
