//! Game loop systems.
//!
//! This module groups the ECS systems and world functions the
//! [`Host`](crate::host::Host) runs every tick.
//!
//! Submodules overview
//! - [`animation`] – advance running animations by the frame delta
//! - [`input`] – read hardware input into [`crate::resources::input::InputTracker`]
//! - [`render`] – draw animated entities using Raylib
//! - [`rooms`] – register rooms, run the active one, apply transitions
//! - [`time`] – update simulation time and count ticks

pub mod animation;
pub mod input;
pub mod render;
pub mod rooms;
pub mod time;
