//! The "game" room.
//!
//! The player ship starts centred and is steered with the direction keys.
//! Asteroids fall from above the top edge at a fixed speed. Touching one ends
//! the round in "lose"; surviving [`GameRules::win_ticks`] updates ends it in
//! "win".
use std::time::Duration;

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::actors::{Obstacle, Player};
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::roomscoped::RoomScoped;
use crate::components::zindex::ZIndex;
use crate::resources::framestore::FrameStore;
use crate::resources::gameconfig::{GameConfig, GameRules};
use crate::resources::input::InputTracker;
use crate::resources::rng::GameRng;
use crate::resources::rooms::RoomMachine;
use crate::resources::screensize::ScreenSize;
use crate::rooms::{LOSE, OBSTACLE_STRIP, PLAYER_STRIP, WIN, per_second};

/// Player frame delay with no horizontal key held.
pub const PLAYER_IDLE_DELAY: Duration = per_second(6);
/// Player frame delay while moving left.
pub const PLAYER_SLOW_DELAY: Duration = per_second(3);
/// Player frame delay while moving right. Wins over left when both are held.
pub const PLAYER_FAST_DELAY: Duration = per_second(12);

/// State of the round in progress.
#[derive(Resource, Debug)]
pub struct GameSession {
    /// Updates run since the room was entered.
    pub ticks: u64,
    /// Stopped prototype every obstacle is copied from.
    pub obstacle: Animation,
}

/// Hitbox of the player: half the frame wide, three quarters high, centred.
pub fn player_collider(frame: Vector2) -> BoxCollider {
    BoxCollider::new(frame.x / 2.0, frame.y * 3.0 / 4.0)
        .with_offset(Vector2::new(frame.x / 4.0, frame.y / 8.0))
}

/// Top-left corner that centres a `frame` sized sprite on the screen.
pub fn centred(screen: &ScreenSize, frame: Vector2) -> MapPosition {
    MapPosition::new(
        (screen.w / 2 - frame.x as i32 / 2) as f32,
        (screen.h / 2 - frame.y as i32 / 2) as f32,
    )
}

/// Keep a `frame` sized sprite fully on screen.
pub fn clamp_to_screen(pos: &mut MapPosition, screen: &ScreenSize, frame: Vector2) {
    let max_x = (screen.w as f32 - frame.x).max(0.0);
    let max_y = (screen.h as f32 - frame.y).max(0.0);
    pos.pos.x = pos.pos.x.clamp(0.0, max_x);
    pos.pos.y = pos.pos.y.clamp(0.0, max_y);
}

/// A new obstacle may appear only once every live one has fallen at least
/// its own height below the top edge.
pub fn spawn_ready(obstacles: impl IntoIterator<Item = (f32, f32)>) -> bool {
    obstacles.into_iter().all(|(y, height)| y >= height)
}

/// One in `chance` odds; zero never succeeds.
pub fn roll_spawn(rng: &mut GameRng, chance: u32) -> bool {
    chance != 0 && rng.0.u32(0..chance) == 0
}

/// Frame delay for the held horizontal direction.
pub fn player_delay(left: bool, right: bool) -> Duration {
    if right {
        PLAYER_FAST_DELAY
    } else if left {
        PLAYER_SLOW_DELAY
    } else {
        PLAYER_IDLE_DELAY
    }
}

/// Spawn the player, reset the session.
pub fn enter(
    mut commands: Commands,
    frames: Res<FrameStore>,
    screen: Res<ScreenSize>,
) -> Result<(), BevyError> {
    let mut ship = Animation::new(frames.get(PLAYER_STRIP)?);
    ship.start(PLAYER_IDLE_DELAY);
    let size = ship.frame_size();
    commands.spawn((
        RoomScoped,
        Player,
        centred(&screen, size),
        player_collider(size),
        ship,
        ZIndex(2),
    ));
    commands.insert_resource(GameSession {
        ticks: 0,
        obstacle: Animation::new(frames.get(OBSTACLE_STRIP)?),
    });
    Ok(())
}

fn spawn_obstacle(
    commands: &mut Commands,
    prototype: &Animation,
    screen: &ScreenSize,
    rng: &mut GameRng,
) {
    let mut rock = prototype.copy();
    rock.start(per_second(5 + rng.0.u64(0..2)));
    let size = rock.frame_size();
    let max_x = (screen.w - size.x as i32).max(0);
    let x = rng.0.i32(0..=max_x);
    debug!("Obstacle at x={} every {:?}", x, rock.delay());
    commands.spawn((
        RoomScoped,
        Obstacle,
        MapPosition::new(x as f32, -size.y),
        BoxCollider::new(size.x, size.y),
        rock,
        ZIndex(1),
    ));
}

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn update(
    mut commands: Commands,
    mut rooms: ResMut<RoomMachine>,
    mut session: ResMut<GameSession>,
    mut rng: ResMut<GameRng>,
    input: Res<InputTracker>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut player: Query<
        (&mut MapPosition, &mut Animation, &BoxCollider),
        (With<Player>, Without<Obstacle>),
    >,
    mut obstacles: Query<
        (Entity, &mut MapPosition, &BoxCollider),
        (With<Obstacle>, Without<Player>),
    >,
) -> Result<(), BevyError> {
    let rules: GameRules = config.rules;
    session.ticks += 1;

    // Steer.
    let (mut ship_pos, mut ship, ship_box) = player.single_mut()?;
    let keys = input.bindings;
    let step = rules.player_speed as f32;
    let left = input.is_down(keys.left);
    let right = input.is_down(keys.right);
    if input.is_down(keys.up) {
        ship_pos.translate(0.0, -step);
    }
    if input.is_down(keys.down) {
        ship_pos.translate(0.0, step);
    }
    if left {
        ship_pos.translate(-step, 0.0);
    }
    if right {
        ship_pos.translate(step, 0.0);
    }
    let size = ship.frame_size();
    clamp_to_screen(&mut ship_pos, &screen, size);
    ship.start(player_delay(left, right));

    // Spawn.
    let alive = obstacles.iter().count();
    if alive < rules.max_obstacles
        && spawn_ready(obstacles.iter().map(|(_, pos, b)| (pos.pos.y, b.size.y)))
        && roll_spawn(&mut rng, rules.obstacle_chance)
    {
        spawn_obstacle(&mut commands, &session.obstacle, &screen, &mut rng);
    }

    // Fall, leave, hit.
    let fall = rules.obstacle_speed as f32;
    let mut hit = false;
    for (entity, mut pos, rock_box) in obstacles.iter_mut() {
        pos.translate(0.0, fall);
        if pos.pos.y >= screen.h as f32 {
            commands.entity(entity).despawn();
            continue;
        }
        if rock_box.overlaps(pos.pos, ship_box, ship_pos.pos) {
            hit = true;
        }
    }

    if hit {
        info!("Hit after {} ticks", session.ticks);
        rooms.request(LOSE);
    } else if session.ticks >= rules.win_ticks {
        info!("Survived {} ticks", session.ticks);
        rooms.request(WIN);
    }
    Ok(())
}
