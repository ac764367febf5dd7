//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Pressing the debug key emits a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
//!
//! Reacting to pause and quit is left to [`crate::game::update`], which only
//! looks at the `InputState` and can therefore run without a window.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    input.action_back.active = is_key_down(input.action_back.key_binding);
    input.action_pause.active = is_key_down(input.action_pause.key_binding);
    input.mode_debug.active = is_key_down(input.mode_debug.key_binding);

    input.action_back.just_pressed = is_key_pressed(input.action_back.key_binding);
    input.action_pause.just_pressed = is_key_pressed(input.action_pause.key_binding);
    input.mode_debug.just_pressed = is_key_pressed(input.mode_debug.key_binding);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
