//! Fixed-rate simulation clock.
//!
//! Rendering runs at whatever rate the window manages, but sprite motion is
//! defined per tick. [`TickClock`] turns variable frame deltas into a whole
//! number of simulation ticks at a fixed ticks-per-second rate, and measures
//! the rate actually achieved so it can be shown in the overlay.
//!
//! # Catch-up
//!
//! A long frame (window drag, breakpoint) would otherwise make the sprite
//! jump across the screen. At most [`MAX_TICKS_PER_FRAME`] ticks are
//! produced per frame and the remaining backlog is dropped.

use bevy_ecs::prelude::Resource;

/// Default simulation rate.
pub const DEFAULT_TPS: u32 = 60;
/// Upper bound on ticks produced by a single frame.
pub const MAX_TICKS_PER_FRAME: u32 = 5;
/// Length of the window used to measure the achieved tick rate.
const MEASURE_WINDOW: f32 = 1.0;

#[derive(Resource, Debug, Clone)]
pub struct TickClock {
    tps: u32,
    accumulator: f32,
    /// Ticks due in the current frame.
    pub pending: u32,
    /// Ticks produced since start.
    pub total_ticks: u64,
    /// While set, no ticks are produced.
    pub paused: bool,
    window_elapsed: f32,
    window_ticks: u32,
    measured_tps: f32,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TPS)
    }
}

impl TickClock {
    /// Create a clock running at `tps` ticks per second (at least 1).
    pub fn new(tps: u32) -> Self {
        Self {
            tps: tps.max(1),
            accumulator: 0.0,
            pending: 0,
            total_ticks: 0,
            paused: false,
            window_elapsed: 0.0,
            window_ticks: 0,
            measured_tps: 0.0,
        }
    }

    pub fn tps(&self) -> u32 {
        self.tps
    }

    /// Seconds per tick.
    pub fn period(&self) -> f32 {
        1.0 / self.tps as f32
    }

    /// Tick rate measured over the last full window.
    pub fn measured_tps(&self) -> f32 {
        self.measured_tps
    }

    /// Feed an unscaled frame delta and compute [`TickClock::pending`].
    ///
    /// Returns the number of ticks due this frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.max(0.0);

        if self.paused {
            self.pending = 0;
            self.accumulator = 0.0;
        } else {
            let period = self.period();
            self.accumulator += dt;
            let due = (self.accumulator / period).floor() as u32;
            if due > MAX_TICKS_PER_FRAME {
                self.pending = MAX_TICKS_PER_FRAME;
                self.accumulator = 0.0;
            } else {
                self.pending = due;
                self.accumulator -= due as f32 * period;
            }
        }
        self.total_ticks += self.pending as u64;

        self.window_elapsed += dt;
        self.window_ticks += self.pending;
        if self.window_elapsed >= MEASURE_WINDOW {
            self.measured_tps = self.window_ticks as f32 / self.window_elapsed;
            self.window_elapsed = 0.0;
            self.window_ticks = 0;
        }

        self.pending
    }

    /// Flip the paused flag; returns the new state.
    ///
    /// Pausing also cancels the ticks already due this frame, so a pause
    /// requested after [`TickClock::advance`] stops the sprite immediately.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if self.paused {
            self.total_ticks = self.total_ticks.saturating_sub(self.pending as u64);
            self.window_ticks = self.window_ticks.saturating_sub(self.pending);
            self.pending = 0;
        }
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_period_yields_one_tick() {
        let mut clock = TickClock::new(50);
        assert_eq!(clock.advance(0.02), 1);
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.advance(0.04), 0);
        assert_eq!(clock.advance(0.04), 0);
        assert_eq!(clock.advance(0.04), 1);
        assert_eq!(clock.pending, 1);
    }

    #[test]
    fn long_frame_is_capped() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(1.0), MAX_TICKS_PER_FRAME);
        // backlog was dropped
        assert_eq!(clock.advance(0.001), 0);
    }

    #[test]
    fn paused_clock_produces_nothing() {
        let mut clock = TickClock::new(60);
        assert!(clock.toggle_pause());
        assert_eq!(clock.advance(0.5), 0);
        assert_eq!(clock.total_ticks, 0);
        assert!(!clock.toggle_pause());
        assert_eq!(clock.advance(0.06), 3);
    }

    #[test]
    fn pausing_cancels_ticks_due_this_frame() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(0.06), 3);
        assert!(clock.toggle_pause());
        assert_eq!(clock.pending, 0);
        assert_eq!(clock.total_ticks, 0);

        // resuming does not bring them back
        assert!(!clock.toggle_pause());
        assert_eq!(clock.pending, 0);
    }

    #[test]
    fn measures_tps_over_a_window() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.measured_tps(), 0.0);
        for _ in 0..11 {
            clock.advance(0.1);
        }
        assert!((clock.measured_tps() - 10.0).abs() < 0.5);
    }

    #[test]
    fn zero_tps_is_raised() {
        let clock = TickClock::new(0);
        assert_eq!(clock.tps(), 1);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.total_ticks, 0);
    }
}
