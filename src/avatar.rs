//! The player's hero as handed from character creation to play
//!
//! Appearance and name are chosen on the New Game screen; stats, currency
//! and equipment come from the selected class.

use crate::config::HeroClass;
use serde::{Deserialize, Serialize};

/// Starting value of every primary stat before class bonuses
pub const BASE_PRIMARY_STAT: i32 = 1;

/// The four primary stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryStats {
    pub physical: i32,
    pub mental: i32,
    pub offense: i32,
    pub defense: i32,
}

impl Default for PrimaryStats {
    fn default() -> Self {
        PrimaryStats {
            physical: BASE_PRIMARY_STAT,
            mental: BASE_PRIMARY_STAT,
            offense: BASE_PRIMARY_STAT,
            defense: BASE_PRIMARY_STAT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub name: String,
    pub gfx_base: String,
    pub gfx_head: String,
    pub gfx_portrait: String,
    pub permadeath: bool,
    /// Name of the applied class, `None` until a class is loaded
    pub class_name: Option<String>,
    pub level: u32,
    pub stats: PrimaryStats,
    pub currency: u32,
    pub equipment: Vec<String>,
}

impl Avatar {
    pub fn new() -> Self {
        Avatar {
            name: String::new(),
            gfx_base: String::new(),
            gfx_head: String::new(),
            gfx_portrait: String::new(),
            permadeath: false,
            class_name: None,
            level: 1,
            stats: PrimaryStats::default(),
            currency: 0,
            equipment: Vec::new(),
        }
    }

    /// Resets progression to a fresh level-1 hero
    ///
    /// Appearance, name and the permadeath flag are kept.
    pub fn reset(&mut self) {
        self.class_name = None;
        self.level = 1;
        self.stats = PrimaryStats::default();
        self.currency = 0;
        self.equipment.clear();
    }

    /// Adds a class's starting bonuses, currency and equipment
    pub fn apply_class(&mut self, class: &HeroClass) {
        self.class_name = Some(class.name.clone());
        self.stats.physical += class.physical;
        self.stats.mental += class.mental;
        self.stats.offense += class.offense;
        self.stats.defense += class.defense;
        self.currency += class.currency;
        self.equipment.extend(class.equipment.iter().cloned());
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
