//! Sprite-strip frame sources.
//!
//! A [`FrameSource`] describes a horizontal strip of equally wide frames cut
//! from one image. The pixels themselves live on the GPU in the
//! [`TextureStore`](crate::resources::texturestore::TextureStore) under the
//! same key; the source only carries the validated geometry, so it can be
//! shared by any number of [`Animation`](crate::components::animation::Animation)
//! cursors and built without a window in tests.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Image, Rectangle, Vector2};
use rustc_hash::FxHashMap;

use crate::error::AssetError;

/// Immutable geometry of a sprite strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSource {
    texture_key: Arc<str>,
    image_width: u32,
    image_height: u32,
    frame_width: u32,
    frame_count: u32,
}

impl FrameSource {
    /// Validate the strip geometry.
    ///
    /// Fails unless `image_width` is a whole multiple of `frame_width`.
    pub fn new(
        texture_key: impl Into<Arc<str>>,
        image_width: u32,
        image_height: u32,
        frame_width: u32,
    ) -> Result<Self, AssetError> {
        let texture_key = texture_key.into();
        if frame_width == 0 || image_width % frame_width != 0 {
            return Err(AssetError::InvalidFrameWidth {
                image_width,
                frame_width,
            });
        }
        if image_width == 0 || image_height == 0 {
            return Err(AssetError::EmptyImage {
                key: texture_key.to_string(),
            });
        }

        Ok(Self {
            texture_key,
            image_width,
            image_height,
            frame_width,
            frame_count: image_width / frame_width,
        })
    }

    /// Key of the texture holding the strip's pixels.
    pub fn texture_key(&self) -> &str {
        &self.texture_key
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count as usize
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Size of a single frame in pixels.
    pub fn frame_size(&self) -> Vector2 {
        Vector2 {
            x: self.frame_width as f32,
            y: self.image_height as f32,
        }
    }

    /// Source rectangle of frame `index` (wrapped into range).
    pub fn frame(&self, index: usize) -> Rectangle {
        let index = (index % self.frame_count()) as u32;
        Rectangle {
            x: (index * self.frame_width) as f32,
            y: 0.0,
            width: self.frame_width as f32,
            height: self.image_height as f32,
        }
    }
}

/// Decode an encoded image and slice it into frames of `frame_width`.
///
/// `file_type` is the extension raylib uses to pick a decoder, e.g. `".png"`.
/// The decoded [`Image`] is returned so the caller can upload it as a texture.
pub fn decode_strip(
    texture_key: &str,
    file_type: &str,
    bytes: &[u8],
    frame_width: u32,
) -> Result<(Image, FrameSource), AssetError> {
    if bytes.is_empty() {
        return Err(AssetError::Decode {
            key: texture_key.to_string(),
            reason: "no data".to_string(),
        });
    }
    let image = Image::load_image_from_mem(file_type, bytes).map_err(|e| AssetError::Decode {
        key: texture_key.to_string(),
        reason: e.to_string(),
    })?;

    let width = u32::try_from(image.width()).unwrap_or(0);
    let height = u32::try_from(image.height()).unwrap_or(0);
    let source = FrameSource::new(texture_key, width, height, frame_width)?;

    Ok((image, source))
}

/// Named frame sources shared between rooms and entities.
#[derive(Resource, Default)]
pub struct FrameStore {
    sources: FxHashMap<String, Arc<FrameSource>>,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a source under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, source: FrameSource) {
        self.sources.insert(name.into(), Arc::new(source));
    }

    /// Shared handle to the source registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<FrameSource>, AssetError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_succeeds_iff_divisible() {
        for image_width in 1..=96u32 {
            for frame_width in 1..=40u32 {
                let result = FrameSource::new("strip", image_width, 8, frame_width);
                if image_width % frame_width == 0 {
                    let source = result.expect("divisible width must be accepted");
                    assert_eq!(source.frame_count(), (image_width / frame_width) as usize);
                } else {
                    assert!(matches!(
                        result,
                        Err(AssetError::InvalidFrameWidth { image_width: w, frame_width: f })
                            if w == image_width && f == frame_width
                    ));
                }
            }
        }
    }

    #[test]
    fn test_zero_frame_width_rejected() {
        assert!(matches!(
            FrameSource::new("strip", 64, 8, 0),
            Err(AssetError::InvalidFrameWidth { image_width: 64, frame_width: 0 })
        ));
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(matches!(
            FrameSource::new("strip", 0, 8, 16),
            Err(AssetError::EmptyImage { .. })
        ));
        assert!(matches!(
            FrameSource::new("strip", 32, 0, 16),
            Err(AssetError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_invalid_frame_width_message() {
        let err = FrameSource::new("strip", 100, 8, 32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "image width (100) is not divisible by frame width (32)"
        );
    }

    #[test]
    fn test_frame_rectangles() {
        let source = FrameSource::new("a1", 160, 30, 32).unwrap();
        assert_eq!(source.frame_count(), 5);
        let r = source.frame(3);
        assert_eq!(r.x, 96.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.width, 32.0);
        assert_eq!(r.height, 30.0);
        // wraps
        assert_eq!(source.frame(5).x, 0.0);
        assert_eq!(source.frame_size(), Vector2 { x: 32.0, y: 30.0 });
    }

    #[test]
    fn test_decode_rejects_empty_bytes() {
        assert!(matches!(
            decode_strip("broken", ".png", &[], 16),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_strip("broken", ".png", b"not a png", 16),
            Err(AssetError::Decode { key, .. }) if key == "broken"
        ));
    }

    #[test]
    fn test_decode_slices_real_strip() {
        let bytes = include_bytes!("../../assets/textures/a1.png");
        let (image, source) = decode_strip("asteroid", ".png", bytes, 32).unwrap();
        assert_eq!((image.width(), image.height()), (160, 32));
        assert_eq!(source.frame_count(), 5);
        assert_eq!(source.texture_key(), "asteroid");

        assert!(matches!(
            decode_strip("asteroid", ".png", bytes, 30),
            Err(AssetError::InvalidFrameWidth { image_width: 160, frame_width: 30 })
        ));
    }

    #[test]
    fn test_store_shares_sources() {
        let mut store = FrameStore::new();
        assert!(store.is_empty());
        store.insert("player", FrameSource::new("player", 160, 40, 40).unwrap());

        let a = store.get("player").unwrap();
        let b = store.get("player").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.len(), 1);
        assert!(matches!(store.get("ghost"), Err(AssetError::Missing(name)) if name == "ghost"));
    }
}
