//! Keyboard polling.
//!
//! [`poll_keyboard`] is the only writer of
//! [`InputTracker`](crate::resources::input::InputTracker). It runs in the host
//! once per frame, before the active room updates, and turns raylib's
//! per-frame key state into [`KeyEvent`] transitions.
use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::RaylibHandle;

use crate::resources::input::{InputTracker, KeyEvent};

/// Feed this frame's key transitions for every tracked key into the tracker.
pub fn poll_keyboard(world: &mut World, rl: &RaylibHandle) {
    let mut input = world.resource_mut::<InputTracker>();
    for code in input.tracked_keys() {
        let down = rl.is_key_down(code);
        let was_down = input.is_down(code);

        if down != was_down {
            trace!("{:?} {}", code, if down { "down" } else { "up" });
            input.handle(KeyEvent { code, pressed: down });
        }
    }
}
