//! Game configuration resource.
//!
//! Manages window and gameplay settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! title = Incoming!
//! width = 480
//! height = 320
//! target_fps = 60
//!
//! [assets]
//! dir = ./assets/textures
//!
//! [game]
//! player_speed = 2
//! obstacle_speed = 2
//! max_obstacles = 3
//! obstacle_chance = 25
//! win_ticks = 1000
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TITLE: &str = "Incoming!";
const DEFAULT_WINDOW_WIDTH: u32 = 480;
const DEFAULT_WINDOW_HEIGHT: u32 = 320;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ASSETS_DIR: &str = "./assets/textures";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Tunables of the game room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Pixels the player moves per tick on each held axis.
    pub player_speed: i32,
    /// Pixels every obstacle falls per tick.
    pub obstacle_speed: i32,
    /// Upper bound of obstacles alive at once.
    pub max_obstacles: usize,
    /// A spawn happens on a tick with probability 1 in `obstacle_chance`.
    /// Zero disables spawning.
    pub obstacle_chance: u32,
    /// Ticks survived in the game room that win the round.
    pub win_ticks: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            player_speed: 2,
            obstacle_speed: 2,
            max_obstacles: 3,
            obstacle_chance: 25,
            win_ticks: 1000,
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second of the game loop.
    pub target_fps: u32,
    /// Directory holding the sprite strips.
    pub assets_dir: PathBuf,
    /// Gameplay tunables.
    pub rules: GameRules,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            rules: GameRules::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, assets={:?}, rules={:?}",
            self.window_width, self.window_height, self.target_fps, self.assets_dir, self.rules
        );

        Ok(())
    }

    /// Parse configuration from INI text. Same rules as [`Self::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = (fps as u32).max(1);
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        // [game] section
        if let Some(speed) = config.getint("game", "player_speed").ok().flatten() {
            self.rules.player_speed = speed as i32;
        }
        if let Some(speed) = config.getint("game", "obstacle_speed").ok().flatten() {
            self.rules.obstacle_speed = speed as i32;
        }
        if let Some(max) = config.getuint("game", "max_obstacles").ok().flatten() {
            self.rules.max_obstacles = max as usize;
        }
        if let Some(chance) = config.getuint("game", "obstacle_chance").ok().flatten() {
            self.rules.obstacle_chance = chance as u32;
        }
        if let Some(ticks) = config.getuint("game", "win_ticks").ok().flatten() {
            self.rules.win_ticks = ticks;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        // [game] section
        let rules = &self.rules;
        config.set("game", "player_speed", Some(rules.player_speed.to_string()));
        config.set("game", "obstacle_speed", Some(rules.obstacle_speed.to_string()));
        config.set("game", "max_obstacles", Some(rules.max_obstacles.to_string()));
        config.set("game", "obstacle_chance", Some(rules.obstacle_chance.to_string()));
        config.set("game", "win_ticks", Some(rules.win_ticks.to_string()));

        config
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
