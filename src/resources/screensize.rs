//! Screen size resource.
//!
//! Stores the logical screen dimensions in pixels. The game is always drawn
//! at this size into the [`RenderTarget`](crate::resources::rendertarget::RenderTarget)
//! and then scaled to the window, so it stays constant for the whole run.

use bevy_ecs::prelude::Resource;

/// Logical screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
