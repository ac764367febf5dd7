//! World-space position of a drawable entity.
//!
//! For moving sprites this mirrors the integer position held by
//! [`SpriteMotion`](super::spritemotion::SpriteMotion); the motion system
//! copies it over after every tick. The renderer only reads this component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of the entity's sprite box, in screen pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_ints(x: i32, y: i32) -> Self {
        Self::new(x as f32, y as f32)
    }
}
