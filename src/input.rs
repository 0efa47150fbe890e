use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::rect::{Point, Rect};

/// Logical inputs the menus react to
///
/// Raw SDL2 keys are folded into these so widgets never look at keycodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Accept,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Tab,
    Backspace,
}

impl Input {
    const COUNT: usize = 8;

    fn index(self) -> usize {
        self as usize
    }

    fn from_keycode(key: Keycode) -> Option<Self> {
        match key {
            Keycode::Return | Keycode::KpEnter => Some(Input::Accept),
            Keycode::Escape => Some(Input::Cancel),
            Keycode::Up => Some(Input::Up),
            Keycode::Down => Some(Input::Down),
            Keycode::Left => Some(Input::Left),
            Keycode::Right => Some(Input::Right),
            Keycode::Tab => Some(Input::Tab),
            Keycode::Backspace => Some(Input::Backspace),
            _ => None,
        }
    }
}

/// Per-frame input state shared by every screen
///
/// A held key stays in `pressing` until released. Consumers "lock" a key
/// when they act on it, so holding Escape does not fire Cancel again on
/// the next frame. `lock_all` ignores everything until every key is
/// released, which keeps a confirming keypress from leaking into the next
/// screen.
///
/// # Architecture
///
/// 1. `begin_frame()` clears per-frame data (typed text, clicks, resize)
/// 2. `handle_event()` folds each SDL2 event into the state
/// 3. Screens query and lock inputs during `logic()`
#[derive(Debug)]
pub struct InputState {
    pressing: [bool; Input::COUNT],
    lock: [bool; Input::COUNT],
    /// Ignore all input until everything is released
    pub lock_all: bool,
    /// Current mouse position in window coordinates
    pub mouse: Point,
    mouse_clicked: bool,
    shift: bool,
    typed: String,
    resized_to: Option<(u32, u32)>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            pressing: [false; Input::COUNT],
            lock: [false; Input::COUNT],
            lock_all: false,
            mouse: Point::new(0, 0),
            mouse_clicked: false,
            shift: false,
            typed: String::new(),
            resized_to: None,
            quit: false,
        }
    }

    /// Clears data that only lives for a single frame
    pub fn begin_frame(&mut self) {
        self.typed.clear();
        self.mouse_clicked = false;
        self.resized_to = None;

        if self.lock_all && !self.pressing.iter().any(|&p| p) {
            self.lock_all = false;
        }
    }

    /// Folds one SDL2 event into the input state
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Quit { .. } => self.quit = true,
            Event::KeyDown {
                keycode: Some(key),
                keymod,
                ..
            } => {
                self.shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
                if let Some(input) = Input::from_keycode(*key) {
                    self.press(input);
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                keymod,
                ..
            } => {
                self.shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
                if let Some(input) = Input::from_keycode(*key) {
                    self.release(input);
                }
            }
            Event::TextInput { text, .. } => self.type_text(text),
            Event::MouseMotion { x, y, .. } => self.mouse = Point::new(*x, *y),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => self.click(*x, *y),
            Event::Window {
                win_event: WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h),
                ..
            } => {
                self.resized_to = Some(((*w).max(1) as u32, (*h).max(1) as u32));
            }
            _ => {
                // Other events are not used by the menus
            }
        }
    }

    /// Marks a logical input as held
    pub fn press(&mut self, input: Input) {
        self.pressing[input.index()] = true;
    }

    /// Releases a logical input and its lock
    pub fn release(&mut self, input: Input) {
        self.pressing[input.index()] = false;
        self.lock[input.index()] = false;
    }

    /// Returns true if `input` is held and nobody has consumed it yet
    pub fn is_pressed(&self, input: Input) -> bool {
        !self.lock_all && self.pressing[input.index()] && !self.lock[input.index()]
    }

    /// Prevents `input` from firing again until it is released
    pub fn lock(&mut self, input: Input) {
        self.lock[input.index()] = true;
    }

    /// Consumes a press: returns true once per physical keypress
    pub fn take_press(&mut self, input: Input) -> bool {
        if self.is_pressed(input) {
            self.lock(input);
            true
        } else {
            false
        }
    }

    pub fn shift_held(&self) -> bool {
        self.shift
    }

    pub fn set_shift(&mut self, held: bool) {
        self.shift = held;
    }

    /// Records a left click at (`x`, `y`)
    pub fn click(&mut self, x: i32, y: i32) {
        self.mouse = Point::new(x, y);
        self.mouse_clicked = true;
    }

    /// Returns true if an unconsumed click happened this frame
    pub fn mouse_clicked(&self) -> bool {
        !self.lock_all && self.mouse_clicked
    }

    /// Consumes this frame's click if it landed inside `rect`
    pub fn take_click_in(&mut self, rect: Rect) -> bool {
        if self.mouse_clicked() && rect.contains_point(self.mouse) {
            self.mouse_clicked = false;
            true
        } else {
            false
        }
    }

    /// Appends text typed this frame
    pub fn type_text(&mut self, text: &str) {
        self.typed.push_str(text);
    }

    /// Text typed since the frame began
    pub fn typed_text(&self) -> &str {
        if self.lock_all { "" } else { &self.typed }
    }

    /// New window size if the window was resized this frame
    pub fn resized_to(&self) -> Option<(u32, u32)> {
        self.resized_to
    }

    pub fn window_resized(&self) -> bool {
        self.resized_to.is_some()
    }

    /// Flags a resize without an SDL2 event
    pub fn set_resized(&mut self, w: u32, h: u32) {
        self.resized_to = Some((w, h));
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once_until_released() {
        let mut input = InputState::new();
        input.press(Input::Cancel);

        assert!(input.take_press(Input::Cancel));
        assert!(!input.take_press(Input::Cancel));
        assert!(!input.is_pressed(Input::Cancel));

        input.release(Input::Cancel);
        input.press(Input::Cancel);
        assert!(input.take_press(Input::Cancel));
    }

    #[test]
    fn test_lock_all_until_everything_released() {
        let mut input = InputState::new();
        input.press(Input::Accept);
        input.lock_all = true;

        input.begin_frame();
        assert!(input.lock_all);
        assert!(!input.is_pressed(Input::Accept));

        input.release(Input::Accept);
        input.begin_frame();
        assert!(!input.lock_all);
    }

    #[test]
    fn test_click_consumed_once() {
        let mut input = InputState::new();
        let rect = Rect::new(10, 10, 50, 20);

        input.click(100, 100);
        assert!(!input.take_click_in(rect));

        input.click(20, 15);
        assert!(input.take_click_in(rect));
        assert!(!input.take_click_in(rect));
    }

    #[test]
    fn test_begin_frame_clears_frame_data() {
        let mut input = InputState::new();
        input.type_text("abc");
        input.click(1, 1);
        input.set_resized(800, 600);

        input.begin_frame();
        assert_eq!(input.typed_text(), "");
        assert!(!input.mouse_clicked());
        assert!(!input.window_resized());
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(Input::from_keycode(Keycode::Escape), Some(Input::Cancel));
        assert_eq!(Input::from_keycode(Keycode::KpEnter), Some(Input::Accept));
        assert_eq!(Input::from_keycode(Keycode::A), None);
    }
}
