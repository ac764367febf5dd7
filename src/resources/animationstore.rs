//! Animation resource registry.
//!
//! This module provides a minimal store for frame sequences that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and pick the texture of the frame selected by the entity's
//! [`FrameCycle`](crate::components::spritemotion::FrameCycle).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&AnimationResource> {
        self.animations.get(key.as_ref())
    }
}

/// Ordered texture keys making up one animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationResource {
    /// Texture keys in [`crate::resources::texturestore::TextureStore`], in
    /// playback order.
    pub frames: Vec<String>,
}

impl AnimationResource {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Texture key of frame `index`, wrapping around past the end.
    pub fn frame_key(&self, index: usize) -> Option<&str> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.frames[index % self.frames.len()].as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_key_wraps() {
        let anim = AnimationResource::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(anim.frame_key(0), Some("a"));
        assert_eq!(anim.frame_key(2), Some("c"));
        assert_eq!(anim.frame_key(4), Some("b"));
    }

    #[test]
    fn empty_animation_has_no_frames() {
        let anim = AnimationResource::new(Vec::new());
        assert_eq!(anim.frame_count(), 0);
        assert_eq!(anim.frame_key(0), None);
    }

    #[test]
    fn store_lookup_by_key() {
        let mut store = AnimationStore::new();
        store.insert("walk", AnimationResource::new(vec!["walk_0".into()]));
        assert!(store.get("walk").is_some());
        assert!(store.get("run").is_none());
    }
}
