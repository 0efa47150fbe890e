//! Game states (screens) and the transitions between them
//!
//! Each frame the active screen runs `logic()`, which returns a
//! [`Transition`] telling the main loop whether to stay or which screen to
//! build next, then `render()`.
//!
//! ```text
//! LoadScreen --empty slot--> NewGameScreen --create--> PlayState
//!     ^   \--used slot------------------------------------^ |
//!     \--------cancel--------/                              |
//!      \-------------------------escape---------------------/
//! ```

pub mod load;
pub mod new_game;
pub mod play;

pub use load::LoadScreen;
pub use new_game::NewGameScreen;
pub use play::PlayState;

use crate::config::EngineSettings;
use crate::messages::MessageCatalog;
use crate::save::{SaveError, SaveManager};
use crate::settings::Settings;
use sdl2::rect::Point;

pub const ENGINE_SETTINGS_FILE: &str = "engine/settings.json";
pub const MESSAGES_FILE: &str = "languages/messages.json";

/// What the main loop should do after a screen's `logic()`
#[derive(Debug)]
pub enum Transition {
    Stay,
    LoadGame,
    NewGame { slot: u8 },
    Play(Box<PlayState>),
    Quit,
}

impl Transition {
    /// True when the main loop must build a new screen
    pub fn changes_screen(&self) -> bool {
        matches!(
            self,
            Transition::LoadGame | Transition::NewGame { .. } | Transition::Play(_)
        )
    }
}

/// Services shared by every screen
pub struct GameContext {
    pub settings: Settings,
    pub engine: EngineSettings,
    pub messages: MessageCatalog,
    pub saves: SaveManager,
}

impl GameContext {
    pub fn new(
        settings: Settings,
        engine: EngineSettings,
        messages: MessageCatalog,
    ) -> Result<Self, SaveError> {
        let saves = SaveManager::new(&settings.save_dir)?;
        Ok(GameContext {
            settings,
            engine,
            messages,
            saves,
        })
    }

    /// Loads engine rules and messages from the data directory
    pub fn load(settings: Settings) -> Result<Self, SaveError> {
        let engine = EngineSettings::load(&settings.data_path(ENGINE_SETTINGS_FILE));
        let messages = MessageCatalog::load(&settings.data_path(MESSAGES_FILE));
        Self::new(settings, engine, messages)
    }

    /// Top-left corner of the centered menu frame
    pub fn frame_offset(&self) -> Point {
        let frame = self.engine.resolutions;
        Point::new(
            (self.settings.view_w as i32 - frame.frame_w as i32) / 2,
            (self.settings.view_h as i32 - frame.frame_h as i32) / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_change_is_flagged() {
        assert!(Transition::LoadGame.changes_screen());
        assert!(Transition::NewGame { slot: 2 }.changes_screen());
        assert!(Transition::Play(Box::new(PlayState::new())).changes_screen());
        assert!(!Transition::Stay.changes_screen());
        assert!(!Transition::Quit.changes_screen());
    }

    #[test]
    fn test_frame_offset_centers_frame() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path(), dir.path().join("saves"));
        let mut ctx =
            GameContext::new(settings, EngineSettings::default(), MessageCatalog::empty()).unwrap();

        assert_eq!(ctx.frame_offset(), Point::new(80, 60));

        ctx.settings.set_view_size(600, 400);
        assert_eq!(ctx.frame_offset(), Point::new(-20, -40));
    }
}
