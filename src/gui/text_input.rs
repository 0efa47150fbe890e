//! Single-line text entry widget

use super::widget::{place, BasePos, ViewSize};
use crate::input::{Input, InputState};
use crate::render::draw_panel;
use crate::text::{draw_text, menu_color, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const FIELD_SIZE: (u32, u32) = (260, 28);
const TEXT_SCALE: u32 = 2;

/// A text box the player types into
///
/// Clicking the box (or pressing Accept while it has keyboard focus) enters
/// edit mode. Accept, Cancel, or a click elsewhere leaves it. While editing,
/// the Accept/Cancel presses that end editing are locked so the screen
/// behind does not also react to them.
#[derive(Debug)]
pub struct TextInput {
    /// Maximum length in characters the player may type
    pub max_length: usize,
    pub edit_mode: bool,
    pub in_focus: bool,
    text: String,
    base: BasePos,
    pos: Rect,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput {
            max_length: 20,
            edit_mode: false,
            in_focus: false,
            text: String::new(),
            base: BasePos::default(),
            pos: Rect::new(0, 0, FIELD_SIZE.0, FIELD_SIZE.1),
        }
    }

    pub fn set_base_pos(&mut self, base: BasePos) {
        self.base = base;
    }

    pub fn set_pos(&mut self, offset: Point, view: ViewSize) {
        self.pos = place(self.base, FIELD_SIZE, offset, view);
    }

    pub fn pos(&self) -> Rect {
        self.pos
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text as-is; `max_length` only limits typing
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn logic(&mut self, input: &mut InputState) {
        if input.mouse_clicked() {
            if self.pos.contains_point(input.mouse) {
                input.take_click_in(self.pos);
                self.edit_mode = true;
            } else {
                self.edit_mode = false;
            }
        }

        if !self.edit_mode {
            if self.in_focus && input.take_press(Input::Accept) {
                self.edit_mode = true;
            }
            return;
        }

        if input.take_press(Input::Accept) || input.take_press(Input::Cancel) {
            self.edit_mode = false;
            return;
        }

        if input.take_press(Input::Backspace) {
            self.text.pop();
        }

        let mut len = self.text.chars().count();
        for c in input.typed_text().chars() {
            if len >= self.max_length {
                break;
            }
            if !c.is_control() {
                self.text.push(c);
                len += 1;
            }
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let border = if self.edit_mode || self.in_focus {
            Color::RGB(255, 220, 120)
        } else {
            Color::RGB(100, 100, 120)
        };
        draw_panel(canvas, self.pos, Color::RGB(20, 20, 28), border)?;

        let text_y = self.pos.y() + (self.pos.height() as i32 - text_height(TEXT_SCALE) as i32) / 2;
        let text_x = self.pos.x() + 6;
        draw_text(canvas, &self.text, text_x, text_y, menu_color("widget_normal"), TEXT_SCALE)?;

        if self.edit_mode {
            // caret
            let caret_x = text_x + text_width(&self.text, TEXT_SCALE) as i32;
            canvas.set_draw_color(menu_color("widget_normal"));
            canvas.fill_rect(Rect::new(caret_x, text_y, 2, text_height(TEXT_SCALE)))?;
        }

        Ok(())
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}
