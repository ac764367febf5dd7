//! Time update systems.
//!
//! Called from the main loop with the raw frame delta before the schedule
//! runs:
//! - [`update_world_time`] updates the shared [`WorldTime`] resource,
//!   applying `time_scale` to the provided delta.
//! - [`update_tick_clock`] converts the same delta into the number of
//!   simulation ticks due this frame.
use bevy_ecs::prelude::*;

use crate::resources::tickclock::TickClock;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Feed the scaled frame delta to the [`TickClock`].
///
/// Returns the number of ticks the motion system will run this frame.
pub fn update_tick_clock(world: &mut World) -> u32 {
    let delta = world.resource::<WorldTime>().delta;
    world.resource_mut::<TickClock>().advance(delta)
}
