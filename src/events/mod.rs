//! Event types and observers used by the demo.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`bounce`] – edge contact notifications from the motion system
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod bounce;
pub mod gamestate;
pub mod switchdebug;
