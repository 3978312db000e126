//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: where an entity is, what it looks like, what it collides
//! with, and which room owns it.
//!
//! Submodules overview:
//! - [`actors`] – `Player` and `Obstacle` role markers
//! - [`animation`] – frame cursor over a shared sprite strip
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`mapposition`] – top-left screen position of an entity
//! - [`roomscoped`] – marker for entities despawned when the room changes
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod actors;
pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod roomscoped;
pub mod zindex;
