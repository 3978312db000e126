//! Incoming! main entry point.
//!
//! Steer the ship with the arrow keys and dodge the falling asteroids until
//! the clock runs out. Built with:
//! - **raylib** for the window, textures and keyboard
//! - **bevy_ecs** for entities, resources and room systems
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing)
//! 2. Open the window, load the sprite strips, register the rooms
//! 3. Every frame: poll the keyboard, tick the host, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use std::path::PathBuf;

use incoming::game;
use incoming::host;
use incoming::resources::gameconfig::GameConfig;

/// Incoming! Dodge the asteroids.
#[derive(Parser)]
#[command(version, about = "Incoming! Dodge the falling asteroids for as long as you can.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{e}; using defaults");
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting {}", config.title);
    if let Err(e) = host::run(&config, game::init) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
