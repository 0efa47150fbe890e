//! Static text label

use super::widget::{Justify, VAlign};
use crate::text::{draw_text, scale_for_font, text_height, text_width};
use serde::{Deserialize, Serialize};
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Placement and style of a label as written in a layout file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelInfo {
    pub x: i32,
    pub y: i32,
    pub justify: Justify,
    pub valign: VAlign,
    pub hidden: bool,
    pub font_style: String,
}

impl Default for LabelInfo {
    fn default() -> Self {
        LabelInfo {
            x: 0,
            y: 0,
            justify: Justify::Left,
            valign: VAlign::Top,
            hidden: false,
            font_style: "font_regular".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Label {
    info: LabelInfo,
    text: String,
    color: Color,
    pos: Point,
}

impl Label {
    pub fn new(info: LabelInfo, text: impl Into<String>, color: Color) -> Self {
        Label {
            pos: Point::new(info.x, info.y),
            info,
            text: text.into(),
            color,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.info.hidden
    }

    /// Offsets the label's anchor point from its base position
    pub fn set_pos(&mut self, offset: Point) {
        self.pos = Point::new(self.info.x + offset.x(), self.info.y + offset.y());
    }

    /// Top-left corner of the drawn text after justification
    pub fn text_origin(&self) -> Point {
        let scale = scale_for_font(&self.info.font_style);
        let w = text_width(&self.text, scale) as i32;
        let h = text_height(scale) as i32;

        let x = match self.info.justify {
            Justify::Left => self.pos.x(),
            Justify::Center => self.pos.x() - w / 2,
            Justify::Right => self.pos.x() - w,
        };
        let y = match self.info.valign {
            VAlign::Top => self.pos.y(),
            VAlign::Center => self.pos.y() - h / 2,
            VAlign::Bottom => self.pos.y() - h,
        };
        Point::new(x, y)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let origin = self.text_origin();
        draw_text(
            canvas,
            &self.text,
            origin.x(),
            origin.y(),
            self.color,
            scale_for_font(&self.info.font_style),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_and_valign() {
        let info = LabelInfo {
            x: 100,
            y: 50,
            justify: Justify::Center,
            valign: VAlign::Center,
            ..LabelInfo::default()
        };
        let mut label = Label::new(info, "Name", Color::RGB(255, 255, 255));
        label.set_pos(Point::new(10, 10));

        // 4 chars * 12px wide, 14px tall at regular size
        assert_eq!(label.text_origin(), Point::new(110 - 24, 60 - 7));
    }

    #[test]
    fn test_label_info_defaults() {
        let info: LabelInfo = serde_json::from_str(r#"{"x": 4, "hidden": true}"#).unwrap();
        assert_eq!(info.x, 4);
        assert!(info.hidden);
        assert_eq!(info.font_style, "font_regular");
    }
}
