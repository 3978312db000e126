//! Title room.
use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::roomscoped::RoomScoped;
use crate::components::zindex::ZIndex;
use crate::resources::framestore::FrameStore;
use crate::resources::input::InputTracker;
use crate::resources::rooms::RoomMachine;
use crate::rooms::{GAME, TITLE_STRIP, per_second};

/// Spawn the full-screen title animation and start it.
pub fn enter(mut commands: Commands, frames: Res<FrameStore>) -> Result<(), BevyError> {
    let mut background = Animation::new(frames.get(TITLE_STRIP)?);
    background.start(per_second(3));
    commands.spawn((RoomScoped, MapPosition::new(0.0, 0.0), ZIndex(0), background));
    Ok(())
}

/// Start a round on a fresh press of the confirm key.
pub fn update(
    mut input: ResMut<InputTracker>,
    mut rooms: ResMut<RoomMachine>,
) -> Result<(), BevyError> {
    let confirm = input.bindings.confirm;
    if input.was_pressed(confirm) {
        rooms.request(GAME);
    }
    Ok(())
}
