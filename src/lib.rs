//! Incoming! library.
//!
//! A small dodge-the-asteroids game built on a room-based ECS host. The
//! modules are public so integration tests can drive [`host::Host`] without a
//! window.

pub mod components;
pub mod error;
pub mod game;
pub mod host;
pub mod resources;
pub mod rooms;
pub mod systems;
