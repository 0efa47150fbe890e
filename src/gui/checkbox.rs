//! Toggle checkbox widget

use super::widget::{place, BasePos, ViewSize};
use crate::input::{Input, InputState};
use crate::render::draw_panel;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const BOX_SIZE: u32 = 24;

#[derive(Debug)]
pub struct CheckBox {
    pub enabled: bool,
    pub in_focus: bool,
    checked: bool,
    base: BasePos,
    pos: Rect,
}

impl CheckBox {
    pub fn new() -> Self {
        CheckBox {
            enabled: true,
            in_focus: false,
            checked: false,
            base: BasePos::default(),
            pos: Rect::new(0, 0, BOX_SIZE, BOX_SIZE),
        }
    }

    pub fn set_base_pos(&mut self, base: BasePos) {
        self.base = base;
    }

    pub fn set_pos(&mut self, offset: Point, view: ViewSize) {
        self.pos = place(self.base, (BOX_SIZE, BOX_SIZE), offset, view);
    }

    pub fn pos(&self) -> Rect {
        self.pos
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Toggles on click (or Accept while focused); returns true if toggled
    pub fn check_click(&mut self, input: &mut InputState) -> bool {
        if !self.enabled {
            return false;
        }
        let clicked =
            input.take_click_in(self.pos) || (self.in_focus && input.take_press(Input::Accept));
        if clicked {
            self.checked = !self.checked;
        }
        clicked
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let border = if self.in_focus {
            Color::RGB(255, 220, 120)
        } else {
            Color::RGB(100, 100, 120)
        };
        draw_panel(canvas, self.pos, Color::RGB(30, 30, 40), border)?;

        if self.checked {
            let color = if self.enabled {
                Color::RGB(220, 220, 240)
            } else {
                Color::RGB(110, 110, 120)
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(
                self.pos.x() + 5,
                self.pos.y() + 5,
                BOX_SIZE - 10,
                BOX_SIZE - 10,
            ))?;
        }

        Ok(())
    }
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new()
    }
}
