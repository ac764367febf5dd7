//! Fixed-tick sprite motion.
//!
//! [`sprite_motion_system`] steps every [`SpriteMotion`] once per tick the
//! [`TickClock`] reports as due this frame, fires a [`BounceEvent`] for each
//! edge hit and mirrors the integer position into [`MapPosition`] for the
//! renderer.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::spritemotion::SpriteMotion;
use crate::events::bounce::BounceEvent;
use crate::resources::tickclock::TickClock;

pub fn sprite_motion_system(
    mut query: Query<(Entity, &mut SpriteMotion, &mut MapPosition)>,
    clock: Res<TickClock>,
    mut commands: Commands,
) {
    let ticks = clock.pending;
    if ticks == 0 {
        return;
    }

    for (entity, mut motion, mut position) in query.iter_mut() {
        for _ in 0..ticks {
            for edge in motion.advance() {
                commands.trigger(BounceEvent {
                    entity,
                    edge,
                    x: motion.x,
                    y: motion.y,
                    flipped: motion.flipped,
                });
            }
        }
        *position = MapPosition::from_ints(motion.x, motion.y);
    }
}
