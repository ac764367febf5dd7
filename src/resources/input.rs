//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the demo cares about and exposes it
//! to systems via the [`InputState`] resource: quitting, pausing the
//! simulation and toggling the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Leave the demo (Escape).
    pub action_back: BoolState,
    /// Pause/resume the simulation (Space).
    pub action_pause: BoolState,
    /// Toggle the debug overlay (F11).
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            action_pause: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}
