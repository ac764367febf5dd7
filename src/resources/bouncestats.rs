//! Bounce counters.
//!
//! Updated by the [`BounceEvent`](crate::events::bounce::BounceEvent)
//! observer and shown by the debug overlay.

use bevy_ecs::prelude::Resource;

use crate::components::spritemotion::Edge;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceStats {
    pub left: u64,
    pub right: u64,
    pub top: u64,
    pub bottom: u64,
}

impl BounceStats {
    pub fn record(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.left += 1,
            Edge::Right => self.right += 1,
            Edge::Top => self.top += 1,
            Edge::Bottom => self.bottom += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.left + self.right + self.top + self.bottom
    }
}
