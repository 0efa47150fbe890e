//! Keyboard focus cycling between widgets

use crate::input::{Input, InputState};

/// Ordered set of focusable widgets
///
/// Tab moves focus forward, Shift+Tab backward, both wrapping. Nothing is
/// focused until the first Tab press.
#[derive(Debug)]
pub struct TabList<T> {
    order: Vec<T>,
    current: Option<usize>,
}

impl<T: Copy + PartialEq> TabList<T> {
    pub fn new() -> Self {
        TabList {
            order: Vec::new(),
            current: None,
        }
    }

    pub fn add(&mut self, widget: T) {
        self.order.push(widget);
    }

    pub fn current(&self) -> Option<T> {
        self.current.map(|i| self.order[i])
    }

    pub fn is_focused(&self, widget: T) -> bool {
        self.current() == Some(widget)
    }

    pub fn next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + 1) % self.order.len(),
            None => 0,
        });
    }

    pub fn previous(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = Some(match self.current {
            Some(0) | None => self.order.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Returns true if focus moved
    pub fn logic(&mut self, input: &mut InputState) -> bool {
        if !input.take_press(Input::Tab) {
            return false;
        }
        if input.shift_held() {
            self.previous();
        } else {
            self.next();
        }
        true
    }
}

impl<T: Copy + PartialEq> Default for TabList<T> {
    fn default() -> Self {
        Self::new()
    }
}
