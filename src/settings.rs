//! Runtime settings: where data and saves live, and the current view size

use crate::gui::ViewSize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "GAMENEW_DATA_DIR";

/// Environment variable overriding the save directory
pub const SAVE_DIR_ENV: &str = "GAMENEW_SAVE_DIR";

pub const DEFAULT_VIEW_W: u32 = 800;
pub const DEFAULT_VIEW_H: u32 = 600;

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
    pub view_w: u32,
    pub view_h: u32,
}

impl Settings {
    pub fn new(data_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Settings {
            data_dir: data_dir.into(),
            save_dir: save_dir.into(),
            view_w: DEFAULT_VIEW_W,
            view_h: DEFAULT_VIEW_H,
        }
    }

    /// Settings from the environment
    ///
    /// Data defaults to `./data`; saves default to the platform data
    /// directory (e.g. `~/.local/share/gamenew/saves`), or `./saves` if
    /// there is none.
    pub fn from_env() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let save_dir = env::var_os(SAVE_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|d| d.join("gamenew").join("saves")))
            .unwrap_or_else(|| PathBuf::from("saves"));
        Self::new(data_dir, save_dir)
    }

    /// Resolves a data-relative path
    pub fn data_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(relative)
    }

    pub fn set_view_size(&mut self, w: u32, h: u32) {
        self.view_w = w;
        self.view_h = h;
    }

    pub fn view(&self) -> ViewSize {
        ViewSize {
            w: self.view_w,
            h: self.view_h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_joins_root() {
        let settings = Settings::new("/game/data", "/tmp/saves");
        assert_eq!(
            settings.data_path("menus/gamenew.json"),
            PathBuf::from("/game/data/menus/gamenew.json")
        );
        assert_eq!(settings.view(), ViewSize { w: 800, h: 600 });
    }
}
