//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `framestore` – sprite strips sliced into frames, shared by name
//! - `gameconfig` – window and gameplay settings from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rng` – seedable random source
//! - `rooms` – room registry, active room and pending transition
//! - `screensize` – playfield dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – frame delta, elapsed time and tick count
pub mod framestore;
pub mod gameconfig;
pub mod input;
pub mod rng;
pub mod rooms;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
