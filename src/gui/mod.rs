//! Screen-Space GUI System
//!
//! Widgets used by the menu screens. Each widget keeps its own state
//! (position, focus, contents) and reacts to [`InputState`] during a
//! screen's `logic()`; drawing happens separately in `render()`.
//!
//! Positions come from layout files as a [`BasePos`]: an anchor on one of
//! nine screen edges plus an offset, resolved with `set_pos()` whenever the
//! window size changes.
//!
//! # Available Components
//!
//! - [`Button`] - text or image push button
//! - [`CheckBox`] - on/off toggle
//! - [`TextInput`] - single-line text entry
//! - [`ListBox`] - scrolling single-selection list with per-row tooltips
//! - [`Tooltip`] - floating text box
//! - [`Label`] - static text
//! - [`TabList`] - keyboard focus cycling
//! - [`Menu`] / [`SlotMenu`] - centered list menus
//!
//! [`InputState`]: crate::input::InputState

pub mod button;
pub mod checkbox;
pub mod label;
pub mod list_box;
pub mod menu;
pub mod slot_menu;
pub mod tab_list;
pub mod text_input;
pub mod tooltip;
pub mod widget;

pub use button::Button;
pub use checkbox::CheckBox;
pub use label::{Label, LabelInfo};
pub use list_box::ListBox;
pub use menu::{Menu, MenuItem};
pub use slot_menu::{SlotChoice, SlotEntry, SlotMenu};
pub use tab_list::TabList;
pub use text_input::TextInput;
pub use tooltip::{Tooltip, TooltipData};
pub use widget::{Alignment, BasePos, Justify, VAlign, ViewSize};
