//! Bounce notifications.
//!
//! The motion system triggers a [`BounceEvent`] every time a sprite touches
//! an edge and turns. [`observe_bounce`] counts them in [`BounceStats`] for
//! the debug overlay and logs them at debug level.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::spritemotion::Edge;
use crate::resources::bouncestats::BounceStats;

/// Event fired when a sprite bounces off an edge.
///
/// `x`/`y` is the sprite position after the offending step was undone and
/// `flipped` the mirror state after the bounce.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceEvent {
    pub entity: Entity,
    pub edge: Edge,
    pub x: i32,
    pub y: i32,
    pub flipped: bool,
}

/// Global observer recording every bounce.
pub fn observe_bounce(trigger: On<BounceEvent>, stats: Option<ResMut<BounceStats>>) {
    let event = trigger.event();
    debug!(
        "{:?} bounced off {:?} edge at ({}, {}), flipped={}",
        event.entity, event.edge, event.x, event.y, event.flipped
    );
    if let Some(mut stats) = stats {
        stats.record(event.edge);
    }
}
