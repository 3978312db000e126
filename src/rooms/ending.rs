//! End-of-round rooms.
//!
//! "lose" and "win" only differ in the picture they show. Both wait for a
//! fresh press of the confirm key; a key still held from the round does not
//! count.
use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::roomscoped::RoomScoped;
use crate::components::zindex::ZIndex;
use crate::resources::framestore::FrameStore;
use crate::resources::input::InputTracker;
use crate::resources::rooms::RoomMachine;
use crate::rooms::{LOSE_STRIP, TITLE, WIN_STRIP};

fn show(commands: &mut Commands, frames: &FrameStore, strip: &str) -> Result<(), BevyError> {
    let picture = Animation::new(frames.get(strip)?);
    commands.spawn((RoomScoped, MapPosition::new(0.0, 0.0), ZIndex(0), picture));
    Ok(())
}

pub fn enter_lose(mut commands: Commands, frames: Res<FrameStore>) -> Result<(), BevyError> {
    show(&mut commands, &frames, LOSE_STRIP)
}

pub fn enter_win(mut commands: Commands, frames: Res<FrameStore>) -> Result<(), BevyError> {
    show(&mut commands, &frames, WIN_STRIP)
}

pub fn update(
    mut input: ResMut<InputTracker>,
    mut rooms: ResMut<RoomMachine>,
) -> Result<(), BevyError> {
    let confirm = input.bindings.confirm;
    if input.was_pressed(confirm) {
        rooms.request(TITLE);
    }
    Ok(())
}
