use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key and its on-screen size.
///
/// The whole texture is stretched over a `width` x `height` box placed at
/// the entity's [`MapPosition`](super::mapposition::MapPosition).
/// `flip_h` mirrors the image inside that box.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            flip_h: false,
        }
    }
}
