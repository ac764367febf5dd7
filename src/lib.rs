//! Sprite bounce library.
//!
//! This module exposes the demo's ECS components, resources, systems, and
//! events for use in integration tests and by the `spritebounce` binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
