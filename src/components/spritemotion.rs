//! Tick-driven sprite motion with edge bouncing.
//!
//! [`SpriteMotion`] carries everything needed to move a sprite around the
//! rim of the screen: an integer position and velocity, the sprite's box,
//! the fixed screen size, the [`BounceRules`] of the running demo and an
//! optional [`FrameCycle`] for walk animations.
//!
//! Motion is axis-aligned. Each call to [`SpriteMotion::advance`] moves the
//! box by its velocity; when the box would leave the allowed area the move
//! on that axis is undone and the sprite turns onto the other axis. The
//! direction of the turn is decided by the [`Circulation`] of the rules, so
//! a sprite keeps tracing the same loop around the rim forever.
//!
//! # Coordinate System
//!
//! - (0, 0) is the top-left corner of the screen
//! - Y+ is down
//! - the position is the top-left corner of the sprite box

use std::ops::Range;

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;

use crate::resources::screensize::ScreenSize;

/// Default per-tick displacement of a moving sprite.
pub const DEFAULT_SPEED: i32 = 3;
/// Default number of ticks each animation frame stays on screen.
pub const DEFAULT_FRAME_HOLD: u32 = 3;

/// One of the four edges a sprite can bounce against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// True for the top and bottom edges, i.e. bounces on the vertical axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Vertical range the sprite is allowed to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalBand {
    /// The whole screen height.
    #[default]
    FullScreen,
    /// Only the lower half of the screen; the top bounce happens at
    /// `screen.h / 2`.
    BottomHalf,
}

impl VerticalBand {
    /// Lowest allowed y coordinate for a screen of height `screen_h`.
    pub fn top(self, screen_h: i32) -> i32 {
        match self {
            VerticalBand::FullScreen => 0,
            VerticalBand::BottomHalf => screen_h / 2,
        }
    }
}

/// Sense in which the sprite travels around the rim (as seen on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Circulation {
    /// Left edge turns up, right edge turns down, top turns right, bottom
    /// turns left.
    #[default]
    Clockwise,
    /// Left edge turns down, right edge turns up, top turns left, bottom
    /// turns right.
    CounterClockwise,
}

impl Circulation {
    /// Velocity after touching `edge` while moving at `speed`.
    pub fn turn(self, edge: Edge, speed: i32) -> (i32, i32) {
        match (self, edge) {
            (Circulation::Clockwise, Edge::Left) => (0, -speed),
            (Circulation::Clockwise, Edge::Right) => (0, speed),
            (Circulation::Clockwise, Edge::Top) => (speed, 0),
            (Circulation::Clockwise, Edge::Bottom) => (-speed, 0),
            (Circulation::CounterClockwise, Edge::Left) => (0, speed),
            (Circulation::CounterClockwise, Edge::Right) => (0, -speed),
            (Circulation::CounterClockwise, Edge::Top) => (-speed, 0),
            (Circulation::CounterClockwise, Edge::Bottom) => (speed, 0),
        }
    }
}

/// Per-demo parameters of the bounce behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceRules {
    /// Magnitude of the velocity after a turn.
    pub speed: i32,
    /// Allowed vertical range.
    pub band: VerticalBand,
    /// Turn direction at each edge.
    pub circulation: Circulation,
    /// Mirror the sprite on every top/bottom bounce.
    pub flip_on_vertical: bool,
}

impl Default for BounceRules {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            band: VerticalBand::FullScreen,
            circulation: Circulation::Clockwise,
            flip_on_vertical: false,
        }
    }
}

/// Frame counter for an ordered sequence of animation frames.
///
/// The frame advances once every `hold_ticks` calls to [`FrameCycle::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    frame: usize,
    frame_count: usize,
    hold: u32,
    hold_ticks: u32,
}

impl FrameCycle {
    /// Start at frame 0 with the hold counter at 0. Zero counts are raised
    /// to 1.
    pub fn new(frame_count: usize, hold_ticks: u32) -> Self {
        Self {
            frame: 0,
            frame_count: frame_count.max(1),
            hold: 0,
            hold_ticks: hold_ticks.max(1),
        }
    }

    /// Advance the hold counter; returns true when the frame changed.
    pub fn tick(&mut self) -> bool {
        self.hold = (self.hold + 1) % self.hold_ticks;
        if self.hold == 0 {
            self.frame = (self.frame + 1) % self.frame_count;
            true
        } else {
            false
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn hold(&self) -> u32 {
        self.hold
    }
}

/// Edges touched during a single tick. At most one per axis.
pub type Bounces = ArrayVec<Edge, 2>;

/// Position, velocity and bounce state of a sprite moving around the rim.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct SpriteMotion {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    /// Sprite box width in screen pixels.
    pub width: i32,
    /// Sprite box height in screen pixels.
    pub height: i32,
    pub screen: ScreenSize,
    pub rules: BounceRules,
    pub animation: Option<FrameCycle>,
    pub flipped: bool,
}

impl SpriteMotion {
    /// Create a sprite at `(x, y)` moving right at `rules.speed`.
    pub fn new(
        x: i32,
        y: i32,
        (width, height): (i32, i32),
        screen: ScreenSize,
        rules: BounceRules,
    ) -> Self {
        Self {
            x,
            y,
            vx: rules.speed,
            vy: 0,
            width,
            height,
            screen,
            rules,
            animation: None,
            flipped: false,
        }
    }

    /// Attach a walk animation of `frame_count` frames, each held for
    /// `hold_ticks` ticks.
    pub fn with_animation(mut self, frame_count: usize, hold_ticks: u32) -> Self {
        self.animation = Some(FrameCycle::new(frame_count, hold_ticks));
        self
    }

    /// Override the current velocity.
    pub fn with_velocity(mut self, vx: i32, vy: i32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Valid starting ranges for a sprite of `bounds` on `screen`.
    ///
    /// Returns `None` when the sprite does not fit inside the band.
    pub fn spawn_area(
        screen: ScreenSize,
        (width, height): (i32, i32),
        band: VerticalBand,
    ) -> Option<(Range<i32>, Range<i32>)> {
        let xs = 0..screen.w - width;
        let ys = band.top(screen.h)..screen.h - height;
        if xs.is_empty() || ys.is_empty() {
            None
        } else {
            Some((xs, ys))
        }
    }

    /// Exclusive upper limit for x.
    pub fn max_x(&self) -> i32 {
        self.screen.w - self.width
    }

    /// Exclusive upper limit for y.
    pub fn max_y(&self) -> i32 {
        self.screen.h - self.height
    }

    /// Lowest allowed y.
    pub fn min_y(&self) -> i32 {
        self.rules.band.top(self.screen.h)
    }

    /// Current animation frame, 0 for static sprites.
    pub fn frame(&self) -> usize {
        self.animation.map_or(0, |cycle| cycle.frame())
    }

    /// Advance one simulation tick.
    ///
    /// Steps the animation counter, integrates the velocity and resolves
    /// edge contact on x, then on y. Returns the edges touched this tick.
    pub fn advance(&mut self) -> Bounces {
        if let Some(cycle) = self.animation.as_mut() {
            cycle.tick();
        }

        let (dx, dy) = (self.vx, self.vy);
        self.x += dx;
        self.y += dy;

        let mut bounces = Bounces::new();

        if self.x < 0 {
            self.x -= dx;
            self.turn(Edge::Left);
            bounces.push(Edge::Left);
        } else if self.x >= self.max_x() {
            self.x -= dx;
            self.turn(Edge::Right);
            bounces.push(Edge::Right);
        }

        if self.y < self.min_y() {
            self.y -= dy;
            self.turn(Edge::Top);
            bounces.push(Edge::Top);
        } else if self.y >= self.max_y() {
            self.y -= dy;
            self.turn(Edge::Bottom);
            bounces.push(Edge::Bottom);
        }

        bounces
    }

    fn turn(&mut self, edge: Edge) {
        let (vx, vy) = self.rules.circulation.turn(edge, self.rules.speed);
        self.vx = vx;
        self.vy = vy;
        if edge.is_vertical() && self.rules.flip_on_vertical {
            self.flipped = !self.flipped;
        }
    }
}
