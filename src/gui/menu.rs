//! Base Menu Component
//!
//! A centered box with a title and a vertical list of items, navigated with
//! the keyboard.

use crate::text::{draw_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Vertical space per item in pixels
    pub item_height: u32,

    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Title text color
    pub title_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 520,
            item_height: 40,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
        }
    }
}

/// A single menu entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem { text: text.into() }
    }
}

/// A stateful, centered list menu
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    /// Creates a new menu with default styling, first item selected
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Menu {
            title: title.into(),
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn height(&self) -> u32 {
        100 + self.items.len() as u32 * self.style.item_height + 20
    }

    /// Render the menu at screen center
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.output_size()?;
        let height = self.height();
        let menu_x = screen_width.saturating_sub(self.style.width) as i32 / 2;
        let menu_y = screen_height.saturating_sub(height) as i32 / 2;
        let menu_rect = Rect::new(menu_x, menu_y, self.style.width, height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(menu_rect)?;

        // Double border
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(menu_rect)?;
        canvas.draw_rect(Rect::new(menu_x + 2, menu_y + 2, self.style.width - 4, height - 4))?;

        let title_width = text_width(&self.title, 3) as i32;
        draw_text(
            canvas,
            &self.title,
            menu_x + (self.style.width as i32 - title_width) / 2,
            menu_y + 30,
            self.style.title_color,
            3,
        )?;

        let item_start_y = menu_y + 100;
        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + (i as u32 * self.style.item_height) as i32;
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(menu_x + 15, item_y - 6, self.style.width - 30, 26))?;
            }

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };

            draw_text(canvas, &item.text, menu_x + 40, item_y, text_color, 2)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu::new(
            "LOAD",
            vec![MenuItem::new("SLOT 1"), MenuItem::new("SLOT 2"), MenuItem::new("QUIT")],
        );
        assert_eq!(menu.selected_index(), 0);

        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
        menu.select_next();
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_empty_menu_navigation_is_noop() {
        let mut menu = Menu::new("EMPTY", Vec::new());
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 0);
    }
}
