//! Keyboard state table.
//!
//! The [`InputTracker`] resource records the up/down state of every key it has
//! seen an event for. It has a single writer,
//! [`poll_keyboard`](crate::systems::input::poll_keyboard), which runs once
//! per frame before the rooms update, and any number of readers inside room
//! update systems. Two query forms are offered:
//!
//! - [`InputTracker::is_down`] – raw "held right now" state
//! - [`InputTracker::was_pressed`] – edge-triggered, true once per physical press
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;
use rustc_hash::FxHashMap;

/// A single transition of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyboardKey,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(code: KeyboardKey) -> Self {
        Self {
            code,
            pressed: true,
        }
    }

    pub fn up(code: KeyboardKey) -> Self {
        Self {
            code,
            pressed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    down: bool,
    /// A `was_pressed` query already reported the current press.
    consumed: bool,
}

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy)]
pub struct Bindings {
    pub up: KeyboardKey,
    pub down: KeyboardKey,
    pub left: KeyboardKey,
    pub right: KeyboardKey,
    pub confirm: KeyboardKey,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            up: KeyboardKey::KEY_UP,
            down: KeyboardKey::KEY_DOWN,
            left: KeyboardKey::KEY_LEFT,
            right: KeyboardKey::KEY_RIGHT,
            confirm: KeyboardKey::KEY_ENTER,
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InputTracker {
    keys: FxHashMap<u32, KeyState>,
    pub bindings: Bindings,
}

impl InputTracker {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            keys: FxHashMap::default(),
            bindings,
        }
    }

    /// Record one key transition. A release re-arms [`Self::was_pressed`].
    pub fn handle(&mut self, event: KeyEvent) {
        let state = self.keys.entry(event.code as u32).or_default();
        state.down = event.pressed;
        if !event.pressed {
            state.consumed = false;
        }
    }

    /// Whether `code` is currently held.
    pub fn is_down(&self, code: KeyboardKey) -> bool {
        self.keys
            .get(&(code as u32))
            .is_some_and(|state| state.down)
    }

    /// True on the first query after `code` went down, false afterwards until
    /// the key is released and pressed again.
    pub fn was_pressed(&mut self, code: KeyboardKey) -> bool {
        match self.keys.get_mut(&(code as u32)) {
            Some(state) if state.down && !state.consumed => {
                state.consumed = true;
                true
            }
            _ => false,
        }
    }

    /// Keys the keyboard poller has to watch.
    pub fn tracked_keys(&self) -> [KeyboardKey; 5] {
        [
            self.bindings.up,
            self.bindings.down,
            self.bindings.left,
            self.bindings.right,
            self.bindings.confirm,
        ]
    }
}
