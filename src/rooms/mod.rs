//! The game's rooms.
//!
//! - [`title`] – animated title screen, confirm starts a round
//! - [`play`] – the round itself: steer, dodge, survive
//! - [`ending`] – the "lose" and "win" screens, confirm returns to the title
//!
//! Each room is an `enter`/`update` pair of systems registered with
//! [`crate::systems::rooms::register_room`] under one of the names below.

pub mod ending;
pub mod play;
pub mod title;

use std::time::Duration;

pub const TITLE: &str = "title";
pub const GAME: &str = "game";
pub const LOSE: &str = "lose";
pub const WIN: &str = "win";

/// Frame source names in the [`FrameStore`](crate::resources::framestore::FrameStore).
pub const TITLE_STRIP: &str = "title";
pub const PLAYER_STRIP: &str = "player";
pub const OBSTACLE_STRIP: &str = "asteroid";
pub const LOSE_STRIP: &str = "lose";
pub const WIN_STRIP: &str = "win";

const SECOND_NANOS: u64 = 1_000_000_000;

/// One `n`th of a second.
pub const fn per_second(n: u64) -> Duration {
    Duration::from_nanos(SECOND_NANOS / n)
}
