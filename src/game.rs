//! Game setup: asset loading and room installation.
//!
//! Every sprite is a horizontal strip of equally wide frames. Full-screen
//! strips (title, lose, win) use the window width as their frame width.

use std::path::Path;

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::error::{AssetError, GameError, RoomError};
use crate::host::Host;
use crate::resources::framestore::{FrameStore, decode_strip};
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::rooms::{
    GAME, LOSE, LOSE_STRIP, OBSTACLE_STRIP, PLAYER_STRIP, TITLE, TITLE_STRIP, WIN, WIN_STRIP,
    ending, play, title,
};

/// How a strip is sliced into frames.
#[derive(Debug, Clone, Copy)]
enum FrameWidth {
    Screen,
    Pixels(u32),
}

/// (frame source name, file in the assets directory, frame width)
const STRIPS: [(&str, &str, FrameWidth); 5] = [
    (TITLE_STRIP, "title.png", FrameWidth::Screen),
    (PLAYER_STRIP, "player.png", FrameWidth::Pixels(40)),
    (OBSTACLE_STRIP, "a1.png", FrameWidth::Pixels(32)),
    (LOSE_STRIP, "lose.png", FrameWidth::Screen),
    (WIN_STRIP, "win.png", FrameWidth::Screen),
];

fn file_type(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_else(|| ".png".to_string())
}

/// Read, decode and upload every strip the rooms use.
pub fn load_assets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &GameConfig,
) -> Result<(FrameStore, TextureStore), AssetError> {
    let mut frames = FrameStore::new();
    let mut textures = TextureStore::new();

    for (name, file, width) in STRIPS {
        let path = config.assets_dir.join(file);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let frame_width = match width {
            FrameWidth::Screen => config.window_width,
            FrameWidth::Pixels(px) => px,
        };
        let (image, source) = decode_strip(name, &file_type(&path), &bytes, frame_width)?;
        let texture =
            rl.load_texture_from_image(thread, &image)
                .map_err(|e| AssetError::Texture {
                    key: name.to_string(),
                    reason: e.to_string(),
                })?;
        info!(
            "Loaded '{}' from {} ({} frames of {}x{})",
            name,
            path.display(),
            source.frame_count(),
            source.frame_width(),
            source.image_height()
        );
        frames.insert(name, source);
        textures.insert(name, texture);
    }

    Ok((frames, textures))
}

/// Register the four rooms and enter the title screen.
///
/// The host's [`FrameStore`] must already hold every strip.
pub fn install(host: &mut Host) -> Result<(), RoomError> {
    host.register_room(TITLE, title::enter, title::update);
    host.register_room(GAME, play::enter, play::update);
    host.register_room(LOSE, ending::enter_lose, ending::update);
    host.register_room(WIN, ending::enter_win, ending::update);
    host.enter_room(TITLE)
}

/// Window-side setup passed to [`crate::host::run`].
pub fn init(
    host: &mut Host,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<(), GameError> {
    let config = host.world().resource::<GameConfig>().clone();
    let (frames, textures) = load_assets(rl, thread, &config)?;
    host.world_mut().insert_resource(frames);
    host.world_mut().insert_non_send_resource(textures);
    install(host)?;
    Ok(())
}
