//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug overlays should
//! be drawn on top of the regular timing text. Remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws sprite boxes, the
/// vertical band limit and bounce counters.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
