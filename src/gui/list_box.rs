//! Scrolling single-selection list widget

use super::tooltip::TooltipData;
use super::widget::{place, BasePos, ViewSize};
use crate::input::{Input, InputState};
use crate::render::draw_panel;
use crate::text::{draw_text, menu_color, text_height};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const ROW_WIDTH: u32 = 180;
const ROW_HEIGHT: u32 = 20;
const TEXT_SCALE: u32 = 2;

#[derive(Debug, Clone)]
struct ListItem {
    value: String,
    tooltip: String,
}

/// A list of text rows showing `rows` entries at a time
///
/// At most one row is selected. When `can_deselect` is false, clicking the
/// selected row keeps it selected.
#[derive(Debug)]
pub struct ListBox {
    pub can_deselect: bool,
    pub in_focus: bool,
    rows: usize,
    items: Vec<ListItem>,
    selected: Option<usize>,
    scroll: usize,
    base: BasePos,
    pos: Rect,
}

impl ListBox {
    /// Creates an empty list showing `rows` rows
    pub fn new(rows: usize) -> Self {
        let rows = rows.max(1);
        ListBox {
            can_deselect: true,
            in_focus: false,
            rows,
            items: Vec::new(),
            selected: None,
            scroll: 0,
            base: BasePos::default(),
            pos: Rect::new(0, 0, ROW_WIDTH, ROW_HEIGHT * rows as u32),
        }
    }

    pub fn set_base_pos(&mut self, base: BasePos) {
        self.base = base;
    }

    pub fn set_pos(&mut self, offset: Point, view: ViewSize) {
        self.pos = place(self.base, self.pos.size(), offset, view);
    }

    pub fn pos(&self) -> Rect {
        self.pos
    }

    pub fn append(&mut self, value: impl Into<String>, tooltip: impl Into<String>) {
        self.items.push(ListItem {
            value: value.into(),
            tooltip: tooltip.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selects `index` and scrolls it into view; out-of-range is ignored
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
            self.scroll_to(index);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn scroll_to(&mut self, index: usize) {
        if index < self.scroll {
            self.scroll = index;
        } else if index >= self.scroll + self.rows {
            self.scroll = index + 1 - self.rows;
        }
    }

    /// Index of the item drawn in row `row`, if any
    fn row_item(&self, row: usize) -> Option<usize> {
        let index = self.scroll + row;
        (row < self.rows && index < self.items.len()).then_some(index)
    }

    fn row_rect(&self, row: usize) -> Rect {
        Rect::new(
            self.pos.x(),
            self.pos.y() + (row as u32 * ROW_HEIGHT) as i32,
            self.pos.width(),
            ROW_HEIGHT,
        )
    }

    fn item_at(&self, point: Point) -> Option<usize> {
        if !self.pos.contains_point(point) {
            return None;
        }
        let row = ((point.y() - self.pos.y()) as u32 / ROW_HEIGHT) as usize;
        self.row_item(row)
    }

    /// Handles clicks and keyboard movement; returns true if the selection changed
    pub fn check_click(&mut self, input: &mut InputState) -> bool {
        if let Some(index) = self.item_at(input.mouse) {
            if input.take_click_in(self.pos) {
                return self.toggle(index);
            }
        }

        if self.in_focus && !self.items.is_empty() {
            let last = self.items.len() - 1;
            if input.take_press(Input::Up) {
                let next = self.selected.map_or(0, |s| s.saturating_sub(1));
                return self.change_to(next);
            }
            if input.take_press(Input::Down) {
                let next = self.selected.map_or(0, |s| (s + 1).min(last));
                return self.change_to(next);
            }
        }

        false
    }

    fn toggle(&mut self, index: usize) -> bool {
        if self.selected == Some(index) {
            if self.can_deselect {
                self.selected = None;
                return true;
            }
            return false;
        }
        self.change_to(index)
    }

    fn change_to(&mut self, index: usize) -> bool {
        if self.selected == Some(index) {
            return false;
        }
        self.select(index);
        true
    }

    /// Tooltip for the row under `mouse`
    pub fn check_tooltip(&self, mouse: Point) -> TooltipData {
        let mut tip = TooltipData::new();
        if let Some(index) = self.item_at(mouse) {
            let text = &self.items[index].tooltip;
            if !text.is_empty() {
                tip.add_text(text);
            }
        }
        tip
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let border = if self.in_focus {
            Color::RGB(255, 220, 120)
        } else {
            Color::RGB(100, 100, 120)
        };
        draw_panel(canvas, self.pos, Color::RGB(25, 25, 32), border)?;

        for row in 0..self.rows {
            let Some(index) = self.row_item(row) else {
                break;
            };
            let rect = self.row_rect(row);

            let color = if self.selected == Some(index) {
                canvas.set_draw_color(Color::RGB(80, 100, 140));
                canvas.fill_rect(Rect::new(rect.x() + 1, rect.y() + 1, rect.width() - 2, rect.height() - 2))?;
                Color::RGB(255, 255, 255)
            } else {
                menu_color("menu_normal")
            };

            let text_y = rect.y() + (ROW_HEIGHT as i32 - text_height(TEXT_SCALE) as i32) / 2;
            draw_text(canvas, &self.items[index].value, rect.x() + 4, text_y, color, TEXT_SCALE)?;
        }

        Ok(())
    }
}
