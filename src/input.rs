//! Keyboard input handling
//!
//! Movement keys are level-triggered (held = intent). Pause and start are
//! edges latched until the next tick consumes them, so several key events
//! between ticks collapse into one snapshot.

use crate::settings::KeyBindings;
use crate::sim::TickInput;

/// What a key does in game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Pause,
    Other,
}

/// Held keys and pending edges between two ticks
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: KeyBindings,
    left_held: bool,
    right_held: bool,
    pause_pressed: bool,
    start_released: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            left_held: false,
            right_held: false,
            pause_pressed: false,
            start_released: false,
        }
    }

    pub fn action(&self, key: &str) -> Action {
        if bound(&self.bindings.pause, key) {
            Action::Pause
        } else if bound(&self.bindings.left, key) {
            Action::Left
        } else if bound(&self.bindings.right, key) {
            Action::Right
        } else {
            Action::Other
        }
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        match self.action(key) {
            Action::Left => self.left_held = true,
            Action::Right => self.right_held = true,
            Action::Pause => self.pause_pressed = true,
            Action::Other => {}
        }
    }

    /// Handle key up event. Any non-pause release also requests a start.
    pub fn key_up(&mut self, key: &str) {
        match self.action(key) {
            Action::Left => self.left_held = false,
            Action::Right => self.right_held = false,
            Action::Pause => return,
            Action::Other => {}
        }
        self.start_released = true;
    }

    /// Drop held keys (e.g. window lost focus). Pending edges are kept.
    pub fn release_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Snapshot for the next tick, consuming the one-shot edges
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.left_held,
            move_right: self.right_held,
            pause: self.pause_pressed,
            start: self.start_released,
        };
        self.pause_pressed = false;
        self.start_released = false;
        input
    }
}

fn bound(keys: &[String], key: &str) -> bool {
    keys.iter().any(|k| k == key)
}
