//! Demo systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – sync the sprite texture and mirroring with its motion
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – run the fixed-tick bounce motion and emit bounce events
//! - [`render`] – draw sprites and overlays using Raylib
//! - [`time`] – update frame time and the simulation tick clock

pub mod animation;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
