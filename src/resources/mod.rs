//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, rendering
//! handles, asset stores and input. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – ordered frame keys for walk cycles
//! - `assetbundle` – keys and sizes of the images loaded for a variant
//! - `bouncestats` – per-edge bounce counters for the debug overlay
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed settings
//! - `gamestate` – authoritative and pending high-level demo state
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `rendertarget` – fixed-resolution framebuffer scaled into the window
//! - `screensize` – logical screen dimensions in pixels
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tickclock` – fixed-rate simulation ticks and measured TPS
//! - `variant` – the per-demo constants
//! - `windowsize` – actual window size and letterbox maths
//! - `worldtime` – frame time and delta
pub mod animationstore;
pub mod assetbundle;
pub mod bouncestats;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rendertarget;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod tickclock;
pub mod variant;
pub mod windowsize;
pub mod worldtime;
