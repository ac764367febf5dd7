//! Render target resource for fixed-resolution rendering.
//!
//! The demos are laid out for a fixed logical screen size. Everything is
//! drawn into a framebuffer texture of that size, which is then scaled into
//! the window with letterboxing/pillarboxing (see
//! [`WindowSize::calculate_letterbox`](crate::resources::windowsize::WindowSize::calculate_letterbox)).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::resources::screensize::ScreenSize;

/// Texture filtering mode for scaling the render target.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Point/nearest-neighbor filtering - sharp pixels, no blur.
    Nearest,
    /// Bilinear filtering - smooth scaling with interpolation.
    #[default]
    Bilinear,
}

impl RenderFilter {
    /// Nearest for unscaled pixel art, bilinear when sprites are shrunk.
    pub fn for_scale(scale: f32) -> Self {
        if (scale - 1.0).abs() < f32::EPSILON {
            RenderFilter::Nearest
        } else {
            RenderFilter::Bilinear
        }
    }
}

/// Render target for fixed-resolution rendering with scaling.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Logical screen size the texture was created with.
    pub size: ScreenSize,
    /// Current texture filtering mode.
    pub filter: RenderFilter,
}

impl RenderTarget {
    /// Create a new render target at the logical screen size.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        size: ScreenSize,
        filter: RenderFilter,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, size.w as u32, size.h as u32)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let target = Self {
            texture,
            size,
            filter,
        };
        target.apply_filter();

        Ok(target)
    }

    /// Apply the current filter setting to the texture via FFI.
    fn apply_filter(&self) {
        let filter_value = match self.filter {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        };
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter_value);
        }
    }

    /// Get the source rectangle for drawing this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.size.w as f32,
            height: -(self.size.h as f32), // Negative to flip Y
        }
    }
}
