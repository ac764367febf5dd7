//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the demo world.
//!
//! Submodules overview:
//! - [`animation`] – link to a frame sequence in the animation store
//! - [`mapposition`] – screen-space position read by the renderer
//! - [`sprite`] – 2D sprite rendering component
//! - [`spritemotion`] – tick-driven bouncing motion and walk-cycle counter
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod mapposition;
pub mod sprite;
pub mod spritemotion;
pub mod zindex;
