//! Animation system.
//!
//! [`animation`] advances every running
//! [`Animation`](crate::components::animation::Animation) by the frame delta
//! held in [`WorldTime`]. It runs once per game-loop tick after the active
//! room has updated, so a room that starts or re-times an animation sees the
//! new speed applied in the same tick.

use std::time::Duration;

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::Animation;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback by this tick's delta.
pub fn animation(mut query: Query<(Entity, &mut Animation)>, time: Res<WorldTime>) {
    let dt = Duration::from_secs_f32(time.delta.max(0.0));
    for (entity, mut anim) in query.iter_mut() {
        if !anim.is_running() {
            continue;
        }
        let steps = anim.tick(dt);
        if steps > 0 {
            trace!("{:?} advanced {} frame(s) to {}", entity, steps, anim.index());
        }
    }
}
