//! Animation system.
//!
//! [`animation`] keeps the visible [`Sprite`] in step with its
//! [`SpriteMotion`]: the frame index chosen by the motion selects a texture
//! key from the [`AnimationStore`], and the mirror flag follows the sprite's
//! walking direction.
//!
//! # Animation Flow
//!
//! 1. Frame keys are registered in [`AnimationStore`] during setup
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. [`SpriteMotion::advance`](crate::components::spritemotion::SpriteMotion::advance)
//!    moves the frame index once every `frame_hold` ticks
//! 4. This system copies the resulting texture key and flip into [`Sprite`]

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::components::spritemotion::SpriteMotion;
use crate::resources::animationstore::AnimationStore;

/// Update sprite texture and mirroring from the motion state.
///
/// Only writes when something changed so change detection stays meaningful.
pub fn animation(
    mut query: Query<(&SpriteMotion, &Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
) {
    for (motion, anim_comp, mut sprite) in query.iter_mut() {
        if let Some(animation) = animation_store.get(&anim_comp.animation_key) {
            if let Some(key) = animation.frame_key(motion.frame())
                && sprite.tex_key != key
            {
                sprite.tex_key = key.to_string();
            }
        }
        if sprite.flip_h != motion.flipped {
            sprite.flip_h = motion.flipped;
        }
    }
}
