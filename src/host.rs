//! Game loop host.
//!
//! [`Host`] owns the ECS [`World`], the room registry inside it, the frame
//! counter and the per-tick schedule. It has no window of its own, so tests
//! can drive [`Host::tick`] directly. [`run`] adds the raylib window: it polls
//! the keyboard, ticks, draws, and lets raylib wait for the next frame at the
//! configured rate.
//!
//! # Tick order
//!
//! 1. Update [`WorldTime`] with the frame delta
//! 2. Run the active room's update system
//! 3. Enter the room requested during that update, if any
//! 4. Advance running animations
//! 5. Count the frame

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;
use log::{info, trace};
use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::error::{GameError, RoomError};
use crate::resources::framestore::FrameStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputTracker;
use crate::resources::rng::GameRng;
use crate::resources::rooms::RoomMachine;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::input::poll_keyboard;
use crate::systems::render::render_pass;
use crate::systems::rooms::{apply_pending_room, enter_room, register_room, update_active_room};
use crate::systems::time::{advance_frame, update_world_time};

pub struct Host {
    world: World,
    update: Schedule,
}

impl Host {
    /// World with every resource the rooms rely on; no rooms registered yet.
    pub fn new(config: &GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        });
        world.insert_resource(InputTracker::default());
        world.insert_resource(RoomMachine::new());
        world.insert_resource(FrameStore::new());
        world.insert_resource(GameRng::new());
        world.insert_resource(config.clone());

        let mut update = Schedule::default();
        update.add_systems(animation);

        Self { world, update }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn register_room<M1, M2>(
        &mut self,
        name: &str,
        enter: impl IntoSystem<(), Result<(), BevyError>, M1> + 'static,
        update: impl IntoSystem<(), Result<(), BevyError>, M2> + 'static,
    ) {
        register_room(&mut self.world, name, enter, update);
    }

    pub fn enter_room(&mut self, name: &str) -> Result<(), RoomError> {
        enter_room(&mut self.world, name)
    }

    pub fn active_room(&self) -> Option<&str> {
        self.world.resource::<RoomMachine>().active()
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    /// Run one iteration of the game loop with `dt` seconds of frame time.
    pub fn tick(&mut self, dt: f32) -> Result<(), RoomError> {
        update_world_time(&mut self.world, dt);
        update_active_room(&mut self.world)?;
        apply_pending_room(&mut self.world)?;
        self.update.run(&mut self.world);
        let frame = advance_frame(&mut self.world);
        trace!("Frame {} done", frame);
        Ok(())
    }
}

/// Open the window and run the game until it is closed.
///
/// `init` runs once after the window exists. It is expected to load assets,
/// register rooms and enter the first one.
pub fn run<F>(config: &GameConfig, init: F) -> Result<(), GameError>
where
    F: FnOnce(&mut Host, &mut RaylibHandle, &RaylibThread) -> Result<(), GameError>,
{
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    // build() panics inside raylib when no window can be created.
    rl.set_target_fps(config.target_fps);

    // Declared after `rl` so textures are released while the window is alive.
    let mut host = Host::new(config);
    init(&mut host, &mut rl, &thread)?;
    info!(
        "Running at {} fps in room '{}'",
        config.target_fps,
        host.active_room().unwrap_or("none")
    );

    while !rl.window_should_close() {
        poll_keyboard(&mut host.world, &rl);
        let dt = rl.get_frame_time();
        host.tick(dt)?;

        let mut d = rl.begin_drawing(&thread);
        render_pass(&mut host.world, &mut d);
    }

    info!("Window closed after {} frames", host.frame());
    Ok(())
}
