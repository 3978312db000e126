//! Role markers for the game room's entities.

use bevy_ecs::prelude::Component;

/// The ship steered by the keyboard.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;

/// A falling asteroid.
#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle;
