//! Save Slot Menu Component
//!
//! Lists the save slots with the hero stored in each, plus a Quit entry.

use super::{Menu, MenuItem};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// What the player picked in the slot menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChoice {
    /// A slot with an existing save
    Continue(u8),
    /// An empty slot
    NewGame(u8),
    Quit,
}

/// Summary of one save slot for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot: u8,
    /// Name of the saved hero, `None` for an empty slot
    pub hero_name: Option<String>,
}

/// Type-safe wrapper around the base [`Menu`]
pub struct SlotMenu {
    menu: Menu,
    slots: Vec<SlotEntry>,
}

impl SlotMenu {
    pub fn new(title: &str, slots: Vec<SlotEntry>, empty_label: &str, quit_label: &str) -> Self {
        let mut items: Vec<MenuItem> = slots
            .iter()
            .map(|entry| {
                let name = entry.hero_name.as_deref().unwrap_or(empty_label);
                MenuItem::new(format!("SLOT {}  {}", entry.slot, name))
            })
            .collect();
        items.push(MenuItem::new(quit_label));

        SlotMenu {
            menu: Menu::new(title, items),
            slots,
        }
    }

    /// Navigate up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    /// Get selected option
    pub fn selected_option(&self) -> SlotChoice {
        match self.slots.get(self.menu.selected_index()) {
            Some(SlotEntry {
                slot,
                hero_name: Some(_),
            }) => SlotChoice::Continue(*slot),
            Some(SlotEntry {
                slot,
                hero_name: None,
            }) => SlotChoice::NewGame(*slot),
            None => SlotChoice::Quit,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.menu.render(canvas)
    }
}
