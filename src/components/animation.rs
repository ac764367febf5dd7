use bevy_ecs::prelude::Component;

/// Links an entity to a frame sequence in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
///
/// The frame index itself is owned by the entity's
/// [`SpriteMotion`](super::spritemotion::SpriteMotion), which advances it in
/// lockstep with the simulation ticks.
#[derive(Debug, Clone, Component, PartialEq, Eq)]
pub struct Animation {
    pub animation_key: String,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
        }
    }
}
