//! Play state
//!
//! Stands in for the game world: it owns the hero created on the New Game
//! screen (or loaded from a slot), writes the initial save on entry, and
//! shows the hero sheet until the player leaves with Escape.

use super::{GameContext, Transition};
use crate::avatar::Avatar;
use crate::config::EngineSettings;
use crate::input::{Input, InputState};
use crate::render::{draw_panel, ImageInfo, ImageLoader, TextureCache};
use crate::save::SaveFile;
use crate::text::{draw_text, menu_color};
use log::{debug, error, info};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const PORTRAIT_SIZE: u32 = 128;

#[derive(Debug)]
pub struct PlayState {
    avatar: Avatar,
    saved: bool,
    portrait: Option<ImageInfo>,
    portrait_requested: bool,
}

impl PlayState {
    /// A play state with a blank hero that still needs saving
    pub fn new() -> Self {
        PlayState {
            avatar: Avatar::new(),
            saved: false,
            portrait: None,
            portrait_requested: false,
        }
    }

    /// Resumes the hero stored in a save file
    pub fn from_save(save: SaveFile) -> Self {
        PlayState {
            avatar: save.hero,
            saved: true,
            portrait: None,
            portrait_requested: false,
        }
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Resets the hero's progression for a new game
    pub fn reset_game(&mut self) {
        self.avatar.reset();
        self.saved = false;
    }

    /// Applies the class at `index`; `None` or an unknown index leaves the hero classless
    pub fn load_class(&mut self, engine: &EngineSettings, index: Option<usize>) {
        match index.and_then(|i| engine.hero_class(i)) {
            Some(class) => {
                self.avatar.apply_class(class);
                info!("Applied class '{}'", class.name);
            }
            None => debug!("No hero class applied (index {:?})", index),
        }
    }

    pub fn logic(
        &mut self,
        input: &mut InputState,
        ctx: &mut GameContext,
        images: &mut dyn ImageLoader,
    ) -> Transition {
        if !self.portrait_requested {
            self.portrait_requested = true;
            if !self.avatar.gfx_portrait.is_empty() {
                self.portrait = images.load_image(&self.avatar.gfx_portrait);
            }
        }

        if !self.saved {
            if let Err(e) = ctx.saves.save_game(&self.avatar) {
                error!("Failed to save new game: {}", e);
            }
            self.saved = true;
        }

        if input.take_press(Input::Cancel) {
            info!("Leaving play state");
            return Transition::LoadGame;
        }

        Transition::Stay
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        images: &TextureCache,
        ctx: &GameContext,
    ) -> Result<(), String> {
        let frame = ctx.frame_offset();
        let x = frame.x() + 40;
        let y = frame.y() + 40;

        let portrait_rect = Rect::new(x, y, PORTRAIT_SIZE, PORTRAIT_SIZE);
        match self.portrait {
            Some(image) => images.draw(canvas, image, None, portrait_rect)?,
            None => draw_panel(canvas, portrait_rect, Color::RGB(30, 30, 40), Color::RGB(100, 100, 120))?,
        }

        let normal = menu_color("menu_normal");
        let text_x = x + PORTRAIT_SIZE as i32 + 24;
        draw_text(canvas, &self.avatar.name, text_x, y, menu_color("menu_bonus"), 3)?;

        let class_name = self
            .avatar
            .class_name
            .as_deref()
            .map(|c| ctx.messages.get(c))
            .unwrap_or_default();
        let stats = &self.avatar.stats;
        let lines = [
            format!("{} {}", ctx.messages.get("Level"), self.avatar.level),
            class_name,
            format!("{}: {}", ctx.messages.get("Physical"), stats.physical),
            format!("{}: {}", ctx.messages.get("Mental"), stats.mental),
            format!("{}: {}", ctx.messages.get("Offense"), stats.offense),
            format!("{}: {}", ctx.messages.get("Defense"), stats.defense),
            format!("{}: {}", ctx.messages.get("Gold"), self.avatar.currency),
        ];
        for (i, line) in lines.iter().enumerate() {
            draw_text(canvas, line, text_x, y + 40 + i as i32 * 20, normal, 2)?;
        }

        if self.avatar.permadeath {
            draw_text(
                canvas,
                &ctx.messages.get("Permadeath"),
                x,
                y + PORTRAIT_SIZE as i32 + 12,
                menu_color("menu_penalty"),
                2,
            )?;
        }

        draw_text(
            canvas,
            &ctx.messages.get("Press ESC to return"),
            x,
            frame.y() + 440,
            menu_color("widget_disabled"),
            1,
        )
    }
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new()
    }
}
