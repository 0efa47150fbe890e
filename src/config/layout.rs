//! Layout of the New Game screen (`menus/gamenew.json`)
//!
//! Every key is optional. Keys are applied one at a time so that a single
//! bad entry is reported and skipped while the rest of the file still
//! applies.
//!
//! ```json
//! {
//!     "button_next": { "x": 404, "y": 184 },
//!     "button_exit": { "x": -80, "y": -20, "align": "bottom" },
//!     "name_label": { "x": 330, "y": 300, "justify": "center" },
//!     "portrait": { "x": 236, "y": 120, "w": 160, "h": 160 },
//!     "show_classlist": true
//! }
//! ```

use super::{read_json, ConfigError};
use crate::gui::{Alignment, BasePos, Justify, LabelInfo, VAlign};
use log::{error, warn};
use sdl2::rect::Rect;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Rectangle as written in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl RectSpec {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Widget positions for the New Game screen
///
/// Positions other than `button_exit` / `button_create` are relative to the
/// centered menu frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGameLayout {
    pub button_prev: BasePos,
    pub button_next: BasePos,
    pub button_exit: BasePos,
    pub button_create: BasePos,
    pub button_permadeath: BasePos,
    pub name_input: BasePos,
    pub class_list: BasePos,
    pub portrait_label: LabelInfo,
    pub name_label: LabelInfo,
    pub permadeath_label: LabelInfo,
    pub classlist_label: LabelInfo,
    pub portrait: RectSpec,
    pub show_classlist: bool,
}

fn centered_label(x: i32, y: i32) -> LabelInfo {
    LabelInfo {
        x,
        y,
        justify: Justify::Center,
        valign: VAlign::Center,
        ..LabelInfo::default()
    }
}

impl Default for NewGameLayout {
    fn default() -> Self {
        NewGameLayout {
            button_prev: BasePos::new(196, 184, Alignment::TopLeft),
            button_next: BasePos::new(404, 184, Alignment::TopLeft),
            button_exit: BasePos::new(-80, -20, Alignment::Bottom),
            button_create: BasePos::new(80, -20, Alignment::Bottom),
            button_permadeath: BasePos::new(400, 376, Alignment::TopLeft),
            name_input: BasePos::new(200, 330, Alignment::TopLeft),
            class_list: BasePos::new(10, 110, Alignment::TopLeft),
            portrait_label: centered_label(316, 96),
            name_label: centered_label(330, 306),
            permadeath_label: LabelInfo {
                x: 230,
                y: 380,
                ..LabelInfo::default()
            },
            classlist_label: centered_label(100, 96),
            portrait: RectSpec {
                x: 236,
                y: 120,
                w: 160,
                h: 160,
            },
            show_classlist: true,
        }
    }
}

fn assign<T: DeserializeOwned>(slot: &mut T, value: Value) -> Result<(), serde_json::Error> {
    *slot = serde_json::from_value(value)?;
    Ok(())
}

impl NewGameLayout {
    /// Loads the layout, falling back to defaults if the file is unusable
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let value: Value = read_json(path)?;
        Self::from_value(value, path)
    }

    /// Applies each recognized key of a parsed layout on top of the defaults
    pub fn from_value(value: Value, path: &Path) -> Result<Self, ConfigError> {
        let Value::Object(map) = value else {
            return Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let mut layout = Self::default();
        for (key, value) in map {
            let result = match key.as_str() {
                "button_prev" => assign(&mut layout.button_prev, value),
                "button_next" => assign(&mut layout.button_next, value),
                "button_exit" => assign(&mut layout.button_exit, value),
                "button_create" => assign(&mut layout.button_create, value),
                "button_permadeath" => assign(&mut layout.button_permadeath, value),
                "name_input" => assign(&mut layout.name_input, value),
                "class_list" => assign(&mut layout.class_list, value),
                "portrait_label" => assign(&mut layout.portrait_label, value),
                "name_label" => assign(&mut layout.name_label, value),
                "permadeath_label" => assign(&mut layout.permadeath_label, value),
                "classlist_label" => assign(&mut layout.classlist_label, value),
                "portrait" => assign(&mut layout.portrait, value),
                "show_classlist" => assign(&mut layout.show_classlist, value),
                _ => {
                    warn!("{}: '{}' is not a valid key.", path.display(), key);
                    continue;
                }
            };

            if let Err(e) = result {
                error!("{}: bad value for '{}': {}", path.display(), key, e);
            }
        }

        Ok(layout)
    }
}
