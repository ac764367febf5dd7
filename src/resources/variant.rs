//! Demo variant presets.
//!
//! The three demos share one motion component and differ only in a handful
//! of constants. A [`DemoVariant`] enumerates those constants; the presets
//! returned by [`DemoVariant::preset`] reproduce each demo.
//!
//! | name      | screen   | band        | animated | background |
//! |-----------|----------|-------------|----------|------------|
//! | `knight`  | 1000x740 | bottom half | yes      | yes        |
//! | `walker`  | 1000x740 | full screen | yes      | no         |
//! | `bouncer` | 640x480  | full screen | no       | no         |

use std::fmt;
use std::path::PathBuf;

use bevy_ecs::prelude::Resource;

use crate::components::spritemotion::{
    BounceRules, Circulation, DEFAULT_FRAME_HOLD, DEFAULT_SPEED, VerticalBand,
};
use crate::resources::screensize::ScreenSize;

/// Names accepted by [`DemoVariant::preset`].
pub const VARIANT_NAMES: [&str; 3] = ["knight", "walker", "bouncer"];
pub const DEFAULT_VARIANT: &str = "knight";

/// Where the moving sprite's images come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteSource {
    /// Every image in a directory, in file name order, played as a walk cycle.
    FrameDir(PathBuf),
    /// One still image.
    Single(PathBuf),
}

/// Constants that distinguish one demo from another.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DemoVariant {
    pub name: String,
    /// Window title.
    pub title: String,
    pub screen: ScreenSize,
    /// Optional image drawn at the origin beneath the sprite, relative to the
    /// assets directory.
    pub background: Option<PathBuf>,
    /// Sprite images, relative to the assets directory.
    pub sprite: SpriteSource,
    /// Factor applied to the image size to get the on-screen sprite box.
    pub scale: f32,
    pub band: VerticalBand,
    /// Cycle through the frames and mirror the sprite on vertical bounces.
    pub animated: bool,
    pub circulation: Circulation,
    pub speed: i32,
    /// Ticks each animation frame is held for.
    pub frame_hold: u32,
}

impl DemoVariant {
    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "knight" => Ok(Self::knight()),
            "walker" => Ok(Self::walker()),
            "bouncer" => Ok(Self::bouncer()),
            other => Err(format!(
                "Unknown variant '{}', expected one of: {}",
                other,
                VARIANT_NAMES.join(", ")
            )),
        }
    }

    /// Animated knight walking around the lower half of a slum backdrop.
    pub fn knight() -> Self {
        Self {
            name: "knight".to_string(),
            title: "Game".to_string(),
            screen: ScreenSize { w: 1000, h: 740 },
            background: Some(PathBuf::from("hivecity-slum-door.png")),
            sprite: SpriteSource::FrameDir(PathBuf::from("Knight_02/02-Walk")),
            scale: 0.25,
            band: VerticalBand::BottomHalf,
            animated: true,
            circulation: Circulation::Clockwise,
            speed: DEFAULT_SPEED,
            frame_hold: DEFAULT_FRAME_HOLD,
        }
    }

    /// The same walk cycle using the whole screen.
    pub fn walker() -> Self {
        Self {
            name: "walker".to_string(),
            title: "Walker".to_string(),
            background: None,
            band: VerticalBand::FullScreen,
            ..Self::knight()
        }
    }

    /// A single still sprite bouncing around a small window.
    pub fn bouncer() -> Self {
        Self {
            name: "bouncer".to_string(),
            title: "Bouncer".to_string(),
            screen: ScreenSize { w: 640, h: 480 },
            background: None,
            sprite: SpriteSource::Single(PathBuf::from("gopher.png")),
            scale: 1.0,
            band: VerticalBand::FullScreen,
            animated: false,
            circulation: Circulation::CounterClockwise,
            speed: DEFAULT_SPEED,
            frame_hold: DEFAULT_FRAME_HOLD,
        }
    }

    /// Bounce parameters handed to [`SpriteMotion`](crate::components::spritemotion::SpriteMotion).
    pub fn bounce_rules(&self) -> BounceRules {
        BounceRules {
            speed: self.speed,
            band: self.band,
            circulation: self.circulation,
            flip_on_vertical: self.animated,
        }
    }

    /// On-screen box of an image of `width` x `height` pixels.
    pub fn scaled_bounds(&self, width: i32, height: i32) -> (i32, i32) {
        (
            (width as f32 * self.scale) as i32,
            (height as f32 * self.scale) as i32,
        )
    }
}

impl fmt::Display for DemoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let band = match self.band {
            VerticalBand::FullScreen => "full screen",
            VerticalBand::BottomHalf => "bottom half",
        };
        write!(
            f,
            "{:<8} {}x{} band={} animated={} {:?}",
            self.name, self.screen.w, self.screen.h, band, self.animated, self.circulation
        )
    }
}
