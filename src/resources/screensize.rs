//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels. Rooms read it to center,
//! clamp and cull their entities.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
