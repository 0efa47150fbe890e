//! Shared widget positioning
//!
//! Widgets are placed from a *base position* read from a layout file. The
//! base is anchored to one of nine screen edges, then shifted by an offset
//! (usually the offset of the centered menu frame).

use sdl2::rect::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Screen anchor for a widget's base position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Horizontal text justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Base position of a widget as written in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasePos {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub align: Alignment,
}

impl BasePos {
    pub fn new(x: i32, y: i32, align: Alignment) -> Self {
        BasePos { x, y, align }
    }
}

/// Size of the visible screen in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSize {
    pub w: u32,
    pub h: u32,
}

/// Resolves a base position for a widget of size `w` x `h`
///
/// Left/top anchors use the base as-is, center anchors measure from the
/// middle of the view, right/bottom anchors measure from the far edge.
pub fn align_to_screen_edge(base: BasePos, w: u32, h: u32, view: ViewSize) -> Point {
    let (view_w, view_h) = (view.w as i32, view.h as i32);
    let (w, h) = (w as i32, h as i32);

    let left = base.x;
    let hcenter = view_w / 2 - w / 2 + base.x;
    let right = view_w - w + base.x;
    let top = base.y;
    let vcenter = view_h / 2 - h / 2 + base.y;
    let bottom = view_h - h + base.y;

    match base.align {
        Alignment::TopLeft => Point::new(left, top),
        Alignment::Top => Point::new(hcenter, top),
        Alignment::TopRight => Point::new(right, top),
        Alignment::Left => Point::new(left, vcenter),
        Alignment::Center => Point::new(hcenter, vcenter),
        Alignment::Right => Point::new(right, vcenter),
        Alignment::BottomLeft => Point::new(left, bottom),
        Alignment::Bottom => Point::new(hcenter, bottom),
        Alignment::BottomRight => Point::new(right, bottom),
    }
}

/// Places a widget rectangle: anchor the base, then add `offset`
pub fn place(base: BasePos, size: (u32, u32), offset: Point, view: ViewSize) -> Rect {
    let anchored = align_to_screen_edge(base, size.0, size.1, view);
    Rect::new(
        anchored.x() + offset.x(),
        anchored.y() + offset.y(),
        size.0,
        size.1,
    )
}
