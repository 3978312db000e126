//! Seedable random source shared by the rooms.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub Rng);

impl GameRng {
    pub fn new() -> Self {
        Self(Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
