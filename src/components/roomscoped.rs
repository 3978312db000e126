//! Room lifetime marker component.
//!
//! Entities with the [`RoomScoped`] component belong to the room that spawned
//! them and are despawned when another room is entered. Despawning drops the
//! entity's [`Animation`](crate::components::animation::Animation), which ends
//! its playback.

use bevy_ecs::prelude::Component;

/// Tag component for entities that live only as long as the current room.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RoomScoped;
