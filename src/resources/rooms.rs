//! Room registry and active-room state.
//!
//! A room is a named screen of the game (title, game, lose, win). Each one is a
//! pair of registered systems: `enter` runs once when the room becomes active,
//! `update` runs once per tick while it is active. Rooms never switch each
//! other directly; an update system calls [`RoomMachine::request`] and the host
//! applies the request right after that update, see
//! [`crate::systems::rooms::apply_pending_room`].

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::error::RoomError;

/// A registered room system. Returning an error stops the game.
pub type RoomSystemId = SystemId<(), Result<(), BevyError>>;

/// Registered systems of one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomHooks {
    pub enter: RoomSystemId,
    pub update: RoomSystemId,
}

#[derive(Resource, Debug, Default)]
pub struct RoomMachine {
    rooms: FxHashMap<String, RoomHooks>,
    active: Option<String>,
    pending: Option<String>,
}

impl RoomMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room, replacing any room already registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, hooks: RoomHooks) {
        self.rooms.insert(name.into(), hooks);
    }

    pub fn hooks(&self, name: &str) -> Result<RoomHooks, RoomError> {
        self.rooms
            .get(name)
            .copied()
            .ok_or_else(|| RoomError::Unknown(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Name of the active room, if one was entered.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }

    /// Mark `name` as active. Does not run its enter hook.
    pub fn set_active(&mut self, name: &str) -> Result<RoomHooks, RoomError> {
        let hooks = self.hooks(name)?;
        self.active = Some(name.to_string());
        Ok(hooks)
    }

    /// Ask the host to switch to `name` once the current update returns.
    /// A later request in the same tick wins.
    pub fn request(&mut self, name: impl Into<String>) {
        self.pending = Some(name.into());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn take_request(&mut self) -> Option<String> {
        self.pending.take()
    }
}
