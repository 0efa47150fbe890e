//! Mouse-following tooltips

use crate::render::draw_panel;
use crate::text::{draw_text, menu_color, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const TEXT_SCALE: u32 = 2;
const PADDING: i32 = 6;
const LINE_GAP: i32 = 4;
const CURSOR_OFFSET: i32 = 16;

/// Text content of a tooltip, one entry per line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipData {
    lines: Vec<String>,
}

impl TooltipData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds text, splitting on newlines
    pub fn add_text(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }
}

/// Renders [`TooltipData`] as a bordered box below-right of the cursor
#[derive(Debug, Default)]
pub struct Tooltip;

impl Tooltip {
    pub fn new() -> Self {
        Tooltip
    }

    /// Box size needed for `data`
    pub fn measure(data: &TooltipData) -> (u32, u32) {
        let widest = data
            .lines()
            .iter()
            .map(|l| text_width(l, TEXT_SCALE))
            .max()
            .unwrap_or(0);
        let count = data.lines().len() as i32;
        let height = count * text_height(TEXT_SCALE) as i32 + (count - 1).max(0) * LINE_GAP;
        (
            widest + 2 * PADDING as u32,
            (height + 2 * PADDING) as u32,
        )
    }

    /// Where the box goes, kept inside the view
    pub fn bounds(data: &TooltipData, at: Point, view: (u32, u32)) -> Rect {
        let (w, h) = Self::measure(data);
        let x = (at.x() + CURSOR_OFFSET).min(view.0 as i32 - w as i32).max(0);
        let y = (at.y() + CURSOR_OFFSET).min(view.1 as i32 - h as i32).max(0);
        Rect::new(x, y, w, h)
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        data: &TooltipData,
        at: Point,
    ) -> Result<(), String> {
        if data.is_empty() {
            return Ok(());
        }

        let view = canvas.output_size()?;
        let rect = Self::bounds(data, at, view);
        draw_panel(canvas, rect, Color::RGB(15, 15, 20), Color::RGB(100, 100, 120))?;

        let mut y = rect.y() + PADDING;
        for line in data.lines() {
            draw_text(canvas, line, rect.x() + PADDING, y, menu_color("menu_normal"), TEXT_SCALE)?;
            y += text_height(TEXT_SCALE) as i32 + LINE_GAP;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_compare() {
        let mut a = TooltipData::new();
        assert!(a.is_empty());

        a.add_text("A stalwart fighter.\nHits hard.");
        assert_eq!(a.lines().len(), 2);

        let mut b = TooltipData::new();
        b.add_text("A stalwart fighter.\nHits hard.");
        assert_eq!(a, b);

        b.add_text("Casts spells.");
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounds_stay_on_screen() {
        let mut data = TooltipData::new();
        data.add_text("Mage");
        let (w, h) = Tooltip::measure(&data);

        let rect = Tooltip::bounds(&data, Point::new(100, 100), (800, 600));
        assert_eq!(rect, Rect::new(116, 116, w, h));

        let rect = Tooltip::bounds(&data, Point::new(795, 595), (800, 600));
        assert_eq!(rect.right(), 800);
        assert_eq!(rect.bottom(), 600);
    }
}
