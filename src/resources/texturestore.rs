//! Texture store resource.
//!
//! A non-send resource that owns every loaded texture keyed by string IDs.
//! [`Sprite`](crate::components::sprite::Sprite) components refer to their
//! image by key; the renderer resolves the key here each frame.
//!
//! Note: This is a non-send resource because Raylib textures must be
//! accessed from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a texture with the given key.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }
}
