//! Whole-game integration tests: the four rooms driven through a headless
//! [`Host`] with synthetic frame strips and a seeded random source.

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use incoming::components::actors::{Obstacle, Player};
use incoming::components::animation::Animation;
use incoming::components::boxcollider::BoxCollider;
use incoming::components::mapposition::MapPosition;
use incoming::components::roomscoped::RoomScoped;
use incoming::error::RoomError;
use incoming::game;
use incoming::host::Host;
use incoming::resources::framestore::{FrameSource, FrameStore};
use incoming::resources::gameconfig::{GameConfig, GameRules};
use incoming::resources::input::{InputTracker, KeyEvent};
use incoming::resources::rng::GameRng;
use incoming::resources::rooms::RoomMachine;
use incoming::rooms::play::{PLAYER_FAST_DELAY, PLAYER_IDLE_DELAY};
use incoming::rooms::{
    GAME, LOSE, LOSE_STRIP, OBSTACLE_STRIP, PLAYER_STRIP, TITLE, TITLE_STRIP, WIN, WIN_STRIP,
    per_second,
};

const DT: f32 = 1.0 / 60.0;

fn strips(with_obstacle: bool) -> FrameStore {
    let mut frames = FrameStore::new();
    let mut add = |name: &str, w: u32, h: u32, fw: u32| {
        frames.insert(name, FrameSource::new(name, w, h, fw).unwrap());
    };
    add(TITLE_STRIP, 960, 320, 480);
    add(PLAYER_STRIP, 160, 40, 40);
    if with_obstacle {
        add(OBSTACLE_STRIP, 160, 32, 32);
    }
    add(LOSE_STRIP, 480, 320, 480);
    add(WIN_STRIP, 480, 320, 480);
    frames
}

fn make_host_with(rules: GameRules, frames: FrameStore) -> Host {
    let mut config = GameConfig::new();
    config.rules = rules;
    let mut host = Host::new(&config);
    host.world_mut().insert_resource(frames);
    host.world_mut().insert_resource(GameRng::with_seed(0x1dea));
    game::install(&mut host).unwrap();
    host
}

fn make_host(rules: GameRules) -> Host {
    make_host_with(rules, strips(true))
}

/// Rules with spawning switched off.
fn quiet_rules() -> GameRules {
    GameRules {
        max_obstacles: 0,
        ..GameRules::default()
    }
}

fn key(host: &mut Host, code: KeyboardKey, pressed: bool) {
    host.world_mut()
        .resource_mut::<InputTracker>()
        .handle(KeyEvent { code, pressed });
}

fn ticks(host: &mut Host, n: usize) {
    for _ in 0..n {
        host.tick(DT).unwrap();
    }
}

/// Press and release confirm on the title screen.
fn start_game(host: &mut Host) {
    assert_eq!(host.active_room(), Some(TITLE));
    key(host, KeyboardKey::KEY_ENTER, true);
    ticks(host, 1);
    key(host, KeyboardKey::KEY_ENTER, false);
    assert_eq!(host.active_room(), Some(GAME));
}

fn count<F: bevy_ecs::query::QueryFilter>(host: &mut Host) -> usize {
    let world = host.world_mut();
    let mut q = world.query_filtered::<Entity, F>();
    q.iter(world).count()
}

fn player(host: &mut Host) -> (MapPosition, std::time::Duration) {
    let world = host.world_mut();
    let mut q = world.query_filtered::<(&MapPosition, &Animation), With<Player>>();
    let (pos, anim) = q.single(world).unwrap();
    (*pos, anim.delay())
}

fn drop_rock(host: &mut Host, x: f32, y: f32) {
    host.world_mut().spawn((
        RoomScoped,
        Obstacle,
        MapPosition::new(x, y),
        BoxCollider::new(32.0, 32.0),
    ));
}

#[test]
fn test_title_animates_until_confirm() {
    let mut host = make_host(GameRules::default());
    assert_eq!(host.active_room(), Some(TITLE));

    // 1.25 s at one frame per third of a second
    for _ in 0..5 {
        host.tick(0.25).unwrap();
    }
    let world = host.world_mut();
    let mut q = world.query::<&Animation>();
    let title = q.single(world).unwrap();
    assert_eq!(title.index(), 1);
    assert!(title.is_running());
    assert_eq!(host.active_room(), Some(TITLE));
}

#[test]
fn test_confirm_enters_game_with_centred_player() {
    let mut host = make_host(GameRules::default());
    start_game(&mut host);

    assert_eq!(count::<With<Player>>(&mut host), 1);
    // the title background is gone, only the player is left
    assert_eq!(count::<With<RoomScoped>>(&mut host), 1);
    let (pos, delay) = player(&mut host);
    assert_eq!(pos, MapPosition::new(220.0, 140.0));
    assert_eq!(delay, PLAYER_IDLE_DELAY);
}

#[test]
fn test_collision_loses_on_exact_tick() {
    let mut host = make_host(quiet_rules());
    start_game(&mut host);
    drop_rock(&mut host, 224.0, -32.0);

    // rock bottom reaches 144 after 72 ticks, the hitbox starts at 145
    ticks(&mut host, 72);
    assert_eq!(host.active_room(), Some(GAME));
    ticks(&mut host, 1);
    assert_eq!(host.active_room(), Some(LOSE));
    assert_eq!(count::<With<Obstacle>>(&mut host), 0);
    assert_eq!(count::<With<Player>>(&mut host), 0);
}

#[test]
fn test_surviving_wins_on_exact_tick() {
    let mut host = make_host(quiet_rules());
    start_game(&mut host);

    ticks(&mut host, 999);
    assert_eq!(host.active_room(), Some(GAME));
    ticks(&mut host, 1);
    assert_eq!(host.active_room(), Some(WIN));
}

#[test]
fn test_win_counts_updates_not_seconds() {
    let mut host = make_host(quiet_rules());
    start_game(&mut host);

    // stalls and zero-length frames alike count as one update each
    for n in 0..999 {
        host.tick(if n % 2 == 0 { 0.0 } else { 5.0 }).unwrap();
    }
    assert_eq!(host.active_room(), Some(GAME));
    host.tick(0.0).unwrap();
    assert_eq!(host.active_room(), Some(WIN));
}

#[test]
fn test_obstacle_removed_past_bottom_edge() {
    let mut host = make_host(quiet_rules());
    start_game(&mut host);
    drop_rock(&mut host, 0.0, 300.0);

    ticks(&mut host, 9);
    assert_eq!(count::<With<Obstacle>>(&mut host), 1);
    ticks(&mut host, 1);
    assert_eq!(count::<With<Obstacle>>(&mut host), 0);
    assert_eq!(host.active_room(), Some(GAME));
}

#[test]
fn test_spawns_wait_for_margin() {
    let mut host = make_host(GameRules {
        obstacle_chance: 1,
        ..GameRules::default()
    });
    start_game(&mut host);

    ticks(&mut host, 1);
    assert_eq!(count::<With<Obstacle>>(&mut host), 1);
    {
        let world = host.world_mut();
        let mut q = world.query_filtered::<(&MapPosition, &Animation), With<Obstacle>>();
        let (pos, anim) = q.single(world).unwrap();
        assert_eq!(pos.pos.y, -32.0);
        assert!((0.0..=448.0).contains(&pos.pos.x));
        assert!(anim.is_running());
        assert!(anim.delay() == per_second(5) || anim.delay() == per_second(6));
    }

    // the first rock clears 32 px below the top edge during tick 34
    ticks(&mut host, 32);
    assert_eq!(count::<With<Obstacle>>(&mut host), 1);
    ticks(&mut host, 1);
    assert_eq!(count::<With<Obstacle>>(&mut host), 2);
}

#[test]
fn test_zero_chance_never_spawns() {
    let mut host = make_host(GameRules {
        obstacle_chance: 0,
        ..GameRules::default()
    });
    start_game(&mut host);
    ticks(&mut host, 500);
    assert_eq!(count::<With<Obstacle>>(&mut host), 0);
}

#[test]
fn test_player_moves_and_stays_on_screen() {
    let mut host = make_host(quiet_rules());
    start_game(&mut host);

    key(&mut host, KeyboardKey::KEY_RIGHT, true);
    key(&mut host, KeyboardKey::KEY_UP, true);
    ticks(&mut host, 1);
    let (pos, delay) = player(&mut host);
    assert_eq!(pos, MapPosition::new(222.0, 138.0));
    assert_eq!(delay, PLAYER_FAST_DELAY);

    ticks(&mut host, 200);
    let (pos, _) = player(&mut host);
    assert_eq!(pos, MapPosition::new(440.0, 0.0));

    key(&mut host, KeyboardKey::KEY_RIGHT, false);
    key(&mut host, KeyboardKey::KEY_UP, false);
    ticks(&mut host, 1);
    let (pos, delay) = player(&mut host);
    assert_eq!(pos, MapPosition::new(440.0, 0.0));
    assert_eq!(delay, PLAYER_IDLE_DELAY);
}

#[test]
fn test_held_confirm_does_not_skip_end_screen() {
    let mut host = make_host(quiet_rules());
    // Enter stays held from the title through the whole round
    key(&mut host, KeyboardKey::KEY_ENTER, true);
    ticks(&mut host, 1);
    assert_eq!(host.active_room(), Some(GAME));
    drop_rock(&mut host, 224.0, -32.0);
    ticks(&mut host, 73);
    assert_eq!(host.active_room(), Some(LOSE));

    ticks(&mut host, 30);
    assert_eq!(host.active_room(), Some(LOSE));

    key(&mut host, KeyboardKey::KEY_ENTER, false);
    key(&mut host, KeyboardKey::KEY_ENTER, true);
    ticks(&mut host, 1);
    assert_eq!(host.active_room(), Some(TITLE));
    // the same press does not start another round
    ticks(&mut host, 5);
    assert_eq!(host.active_room(), Some(TITLE));
}

#[test]
fn test_win_screen_returns_to_title() {
    let mut host = make_host(GameRules {
        win_ticks: 10,
        ..quiet_rules()
    });
    start_game(&mut host);
    ticks(&mut host, 10);
    assert_eq!(host.active_room(), Some(WIN));
    assert_eq!(count::<With<RoomScoped>>(&mut host), 1);

    key(&mut host, KeyboardKey::KEY_ENTER, true);
    ticks(&mut host, 1);
    assert_eq!(host.active_room(), Some(TITLE));
}

#[test]
fn test_new_round_starts_fresh() {
    let mut host = make_host(GameRules {
        win_ticks: 10,
        ..quiet_rules()
    });
    start_game(&mut host);
    key(&mut host, KeyboardKey::KEY_LEFT, true);
    ticks(&mut host, 10);
    key(&mut host, KeyboardKey::KEY_LEFT, false);
    assert_eq!(host.active_room(), Some(WIN));

    key(&mut host, KeyboardKey::KEY_ENTER, true);
    ticks(&mut host, 1);
    key(&mut host, KeyboardKey::KEY_ENTER, false);
    start_game(&mut host);

    let (pos, _) = player(&mut host);
    assert_eq!(pos, MapPosition::new(220.0, 140.0));
    ticks(&mut host, 9);
    assert_eq!(host.active_room(), Some(GAME));
}

#[test]
fn test_unknown_room_request_is_fatal() {
    let mut host = make_host(GameRules::default());
    host.world_mut()
        .resource_mut::<RoomMachine>()
        .request("nowhere");
    assert!(matches!(
        host.tick(DT),
        Err(RoomError::Unknown(name)) if name == "nowhere"
    ));
}

#[test]
fn test_missing_strip_fails_room_entry() {
    let mut host = make_host_with(GameRules::default(), strips(false));
    key(&mut host, KeyboardKey::KEY_ENTER, true);
    assert!(matches!(
        host.tick(DT),
        Err(RoomError::System { room, .. }) if room == GAME
    ));
}
