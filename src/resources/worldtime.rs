use bevy_ecs::prelude::Resource;

/// Game-loop clock.
///
/// `delta` and `elapsed` are wall-clock seconds; `frame_count` counts
/// completed ticks and is what game rules measure.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
