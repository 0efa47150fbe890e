//! Push button widget

use super::widget::{place, BasePos, ViewSize};
use crate::input::{Input, InputState};
use crate::render::{draw_panel, ImageInfo, ImageLoader, TextureCache};
use crate::text::{draw_text, menu_color, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const TEXT_BUTTON_SIZE: (u32, u32) = (120, 32);
const IMAGE_BUTTON_FALLBACK: (u32, u32) = (32, 32);
const LABEL_SCALE: u32 = 2;

/// A clickable button with either a text label or an image face
///
/// Disabled buttons ignore clicks and the Accept key.
#[derive(Debug)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
    pub in_focus: bool,
    base: BasePos,
    pos: Rect,
    image: Option<ImageInfo>,
}

impl Button {
    /// Creates a text button
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            enabled: true,
            in_focus: false,
            base: BasePos::default(),
            pos: Rect::new(0, 0, TEXT_BUTTON_SIZE.0, TEXT_BUTTON_SIZE.1),
            image: None,
        }
    }

    /// Creates an image button
    ///
    /// If the image can't be loaded the button keeps working and draws
    /// `fallback_label` instead.
    pub fn with_image(images: &mut dyn ImageLoader, path: &str, fallback_label: &str) -> Self {
        let image = images.load_image(path);
        let (w, h) = image
            .map(|i| (i.width, i.height))
            .unwrap_or(IMAGE_BUTTON_FALLBACK);

        Button {
            label: fallback_label.to_string(),
            enabled: true,
            in_focus: false,
            base: BasePos::default(),
            pos: Rect::new(0, 0, w, h),
            image,
        }
    }

    pub fn set_base_pos(&mut self, base: BasePos) {
        self.base = base;
    }

    /// Resolves the on-screen rectangle from the base position
    pub fn set_pos(&mut self, offset: Point, view: ViewSize) {
        self.pos = place(self.base, self.pos.size(), offset, view);
    }

    pub fn pos(&self) -> Rect {
        self.pos
    }

    /// Returns true if the button was activated this frame
    pub fn check_click(&mut self, input: &mut InputState) -> bool {
        if !self.enabled {
            return false;
        }
        if input.take_click_in(self.pos) {
            return true;
        }
        self.in_focus && input.take_press(Input::Accept)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, images: &TextureCache) -> Result<(), String> {
        if let Some(image) = self.image {
            images.draw(canvas, image, None, self.pos)?;
            if !self.enabled {
                canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
                canvas.set_draw_color(Color::RGBA(0, 0, 0, 140));
                canvas.fill_rect(self.pos)?;
                canvas.set_blend_mode(sdl2::render::BlendMode::None);
            }
        } else {
            let fill = if self.enabled {
                Color::RGB(60, 60, 80)
            } else {
                Color::RGB(40, 40, 45)
            };
            draw_panel(canvas, self.pos, fill, Color::RGB(100, 100, 120))?;

            let color = if self.enabled {
                menu_color("widget_normal")
            } else {
                menu_color("widget_disabled")
            };
            let w = text_width(&self.label, LABEL_SCALE) as i32;
            let h = text_height(LABEL_SCALE) as i32;
            draw_text(
                canvas,
                &self.label,
                self.pos.x() + (self.pos.width() as i32 - w) / 2,
                self.pos.y() + (self.pos.height() as i32 - h) / 2,
                color,
                LABEL_SCALE,
            )?;
        }

        if self.in_focus {
            canvas.set_draw_color(Color::RGB(255, 220, 120));
            canvas.draw_rect(self.pos)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::widget::Alignment;
    use crate::render::testing::FakeImages;

    const VIEW: ViewSize = ViewSize { w: 800, h: 600 };

    #[test]
    fn test_click_inside_activates() {
        let mut button = Button::new("Create");
        button.set_base_pos(BasePos::new(10, 10, Alignment::TopLeft));
        button.set_pos(Point::new(0, 0), VIEW);

        let mut input = InputState::new();
        input.click(15, 15);
        assert!(button.check_click(&mut input));
    }

    #[test]
    fn test_disabled_ignores_click_and_accept() {
        let mut button = Button::new("Create");
        button.enabled = false;
        button.in_focus = true;

        let mut input = InputState::new();
        input.click(5, 5);
        input.press(Input::Accept);
        assert!(!button.check_click(&mut input));
        // The click was not consumed by the disabled button
        assert!(input.mouse_clicked());
    }

    #[test]
    fn test_focused_button_accepts_keyboard() {
        let mut button = Button::new("Cancel");
        button.in_focus = true;

        let mut input = InputState::new();
        input.press(Input::Accept);
        assert!(button.check_click(&mut input));
        assert!(!button.check_click(&mut input));
    }

    #[test]
    fn test_image_button_takes_image_size() {
        let mut images = FakeImages::new();
        let button = Button::with_image(&mut images, "images/menus/buttons/left.png", "<");
        assert_eq!(button.pos().size(), (32, 32));
        assert_eq!(images.last(), Some("images/menus/buttons/left.png"));

        images.mark_missing("images/menus/buttons/right.png");
        let button = Button::with_image(&mut images, "images/menus/buttons/right.png", ">");
        assert_eq!(button.pos().size(), IMAGE_BUTTON_FALLBACK);
        assert_eq!(button.label, ">");
    }
}
