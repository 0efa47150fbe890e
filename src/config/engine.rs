//! Engine rules shared by every screen (`engine/settings.json`)

use super::read_json;
use log::error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A playable class offered on the New Game screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroClass {
    /// Message key of the class name
    pub name: String,
    /// Message key of the class description (tooltip)
    pub description: String,
    /// Hero option ids this class may use; empty means all of them
    pub options: Vec<usize>,
    pub currency: u32,
    /// Item ids the hero starts with
    pub equipment: Vec<String>,
    pub physical: i32,
    pub mental: i32,
    pub offense: i32,
    pub defense: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathPenalty {
    /// Forces permadeath for every new hero
    pub permadeath: bool,
}

/// Size of the centered menu frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolutions {
    pub frame_w: u32,
    pub frame_h: u32,
}

impl Default for Resolutions {
    fn default() -> Self {
        Resolutions {
            frame_w: 640,
            frame_h: 480,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub hero_classes: Vec<HeroClass>,
    pub death_penalty: DeathPenalty,
    pub resolutions: Resolutions,
}

impl EngineSettings {
    /// Loads engine settings, falling back to defaults on error
    pub fn load(path: &Path) -> Self {
        read_json(path).unwrap_or_else(|e| {
            error!("{}", e);
            Self::default()
        })
    }

    pub fn hero_class(&self, index: usize) -> Option<&HeroClass> {
        self.hero_classes.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: EngineSettings = serde_json::from_str(
            r#"{ "hero_classes": [ { "name": "Mage", "options": [2, 3], "mental": 3 } ] }"#,
        )
        .unwrap();

        assert_eq!(settings.resolutions, Resolutions::default());
        assert!(!settings.death_penalty.permadeath);

        let mage = settings.hero_class(0).unwrap();
        assert_eq!(mage.options, vec![2, 3]);
        assert_eq!(mage.mental, 3);
        assert_eq!(mage.physical, 0);
        assert!(settings.hero_class(1).is_none());
    }
}
