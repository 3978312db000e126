//! Room switching.
//!
//! These functions take the whole [`World`] because entering a room runs its
//! registered enter system synchronously, before anything else observes the
//! new room.
use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::roomscoped::RoomScoped;
use crate::error::RoomError;
use crate::resources::rooms::{RoomHooks, RoomMachine, RoomSystemId};

/// Register `enter` and `update` as the systems of room `name`.
pub fn register_room<M1, M2>(
    world: &mut World,
    name: &str,
    enter: impl IntoSystem<(), Result<(), BevyError>, M1> + 'static,
    update: impl IntoSystem<(), Result<(), BevyError>, M2> + 'static,
) {
    let hooks = RoomHooks {
        enter: world.register_system(enter),
        update: world.register_system(update),
    };
    world.resource_mut::<RoomMachine>().register(name, hooks);
    debug!("Registered room '{}'", name);
}

/// Make `name` the active room and run its enter system.
///
/// Every [`RoomScoped`] entity left by the previous room is despawned first.
pub fn enter_room(world: &mut World, name: &str) -> Result<(), RoomError> {
    let previous = world
        .resource::<RoomMachine>()
        .active()
        .map(str::to_string);
    let hooks = world.resource_mut::<RoomMachine>().set_active(name)?;
    info!(
        "Entering room '{}' (from {})",
        name,
        previous.as_deref().unwrap_or("nothing")
    );

    let scoped: Vec<Entity> = world
        .query_filtered::<Entity, With<RoomScoped>>()
        .iter(world)
        .collect();
    for entity in scoped {
        world.despawn(entity);
    }

    run_room_system(world, hooks.enter, name)
}

/// Run one update of the active room.
pub fn update_active_room(world: &mut World) -> Result<(), RoomError> {
    let rooms = world.resource::<RoomMachine>();
    let name = rooms.active().ok_or(RoomError::NoActiveRoom)?.to_string();
    let hooks = rooms.hooks(&name)?;

    run_room_system(world, hooks.update, &name)
}

fn run_room_system(world: &mut World, id: RoomSystemId, room: &str) -> Result<(), RoomError> {
    let failed = |reason: String| RoomError::System {
        room: room.to_string(),
        reason,
    };
    world
        .run_system(id)
        .map_err(|e| failed(e.to_string()))?
        .map_err(|e| failed(e.to_string()))
}

/// Apply a transition requested during the last update, if any.
pub fn apply_pending_room(world: &mut World) -> Result<bool, RoomError> {
    match world.resource_mut::<RoomMachine>().take_request() {
        Some(next) => {
            enter_room(world, &next)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
