//! Error types.
//!
//! Asset problems and room lookups are reported to the caller; everything that
//! reaches [`GameError`] is fatal and ends the process with a diagnostic.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning an encoded image into a frame strip.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image width ({image_width}) is not divisible by frame width ({frame_width})")]
    InvalidFrameWidth { image_width: u32, frame_width: u32 },
    #[error("image '{key}' has no pixels")]
    EmptyImage { key: String },
    #[error("failed to decode image '{key}': {reason}")]
    Decode { key: String, reason: String },
    #[error("failed to create texture for '{key}': {reason}")]
    Texture { key: String, reason: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no frame source named '{0}'")]
    Missing(String),
}

/// Room registry misuse. Always a programming or configuration mistake.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("no room registered under '{0}'")]
    Unknown(String),
    #[error("no room is active")]
    NoActiveRoom,
    #[error("room '{room}' failed to run: {reason}")]
    System { room: String, reason: String },
}

/// Top-level error surfaced to `main`.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Room(#[from] RoomError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_shows_wrapped_message() {
        let asset: GameError = AssetError::Missing("player".to_string()).into();
        assert_eq!(asset.to_string(), "no frame source named 'player'");

        let room: GameError = RoomError::Unknown("nowhere".to_string()).into();
        assert!(matches!(room, GameError::Room(RoomError::Unknown(_))));
        assert_eq!(room.to_string(), "no room registered under 'nowhere'");
    }
}
