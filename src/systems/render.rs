use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;
use crate::resources::texturestore::TextureStore;

/// Draw every animated entity at its position, lowest [`ZIndex`] first.
///
/// The source rectangle is the animation's current frame; the texture is
/// looked up in the non-send [`TextureStore`] by the frame source's key.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::BLACK);

    // Collect first so the query borrow ends before the texture lookup.
    let mut to_draw: Vec<(String, Rectangle, Vector2, i32)> = {
        let mut q = world.query::<(&Animation, &MapPosition, Option<&ZIndex>)>();
        q.iter(world)
            .map(|(anim, pos, z)| {
                (
                    anim.frames().texture_key().to_string(),
                    anim.current_frame(),
                    pos.pos,
                    z.map_or(0, |z| z.0),
                )
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, z)| *z);

    let Some(textures) = world.get_non_send_resource::<TextureStore>() else {
        warn!("No TextureStore in world, nothing drawn");
        return;
    };

    for (key, src, pos, _z) in to_draw.iter() {
        match textures.get(key) {
            Some(tex) => d.draw_texture_rec(tex, *src, *pos, Color::WHITE),
            None => warn!("Texture '{}' not loaded", key),
        }
    }
}
