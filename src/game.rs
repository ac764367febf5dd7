//! Demo setup and per-frame game logic.
//!
//! - [`load_assets`] loads a variant's images into the texture and animation
//!   stores and describes them in an [`AssetBundle`].
//! - [`setup`] runs once when entering [`GameStates::Setup`] and spawns the
//!   background and the moving sprite from the bundle.
//! - [`update`] reacts to the pause and quit keys while playing.
use std::path::Path;

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::spritemotion::{SpriteMotion, VerticalBand};
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::assetbundle::{AssetBundle, TextureInfo, list_frame_files};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tickclock::TickClock;
use crate::resources::variant::{DemoVariant, SpriteSource};

/// Animation key of the walk cycle.
pub const WALK_ANIMATION: &str = "walk";
/// Texture key of the background image.
pub const BACKGROUND_KEY: &str = "background";

/// Load every image the variant needs from `assets_dir`.
///
/// Textures go into `textures`; animated variants also register their frame
/// sequence under [`WALK_ANIMATION`]. Any missing or undecodable file is an
/// error.
pub fn load_assets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    variant: &DemoVariant,
    assets_dir: &Path,
    textures: &mut TextureStore,
    animations: &mut AnimationStore,
) -> Result<AssetBundle, String> {
    let background = match &variant.background {
        Some(file) => Some(load_texture_into(
            rl,
            th,
            &assets_dir.join(file),
            BACKGROUND_KEY,
            textures,
        )?),
        None => None,
    };

    let paths = match &variant.sprite {
        SpriteSource::FrameDir(dir) => list_frame_files(&assets_dir.join(dir))?,
        SpriteSource::Single(file) => vec![assets_dir.join(file)],
    };
    let mut frames = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let key = format!("frame_{:02}", index);
        frames.push(load_texture_into(rl, th, path, &key, textures)?);
    }

    let bundle = AssetBundle::new(background, frames)?;
    if variant.animated {
        animations.insert(WALK_ANIMATION, AnimationResource::new(bundle.frame_keys()));
    }

    let (w, h) = bundle.sprite_size();
    info!(
        "Loaded {} sprite frame(s) of {}x{} for variant '{}' from {:?}",
        bundle.frames().len(),
        w,
        h,
        variant.name,
        assets_dir
    );
    Ok(bundle)
}

fn load_texture_into(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &Path,
    key: &str,
    textures: &mut TextureStore,
) -> Result<TextureInfo, String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| format!("Asset path is not valid UTF-8: {:?}", path))?;
    let texture = rl
        .load_texture(th, path_str)
        .map_err(|e| format!("Failed to load texture {:?}: {}", path, e))?;
    let info = TextureInfo::new(key, texture.width, texture.height);
    textures.insert(key, texture);
    Ok(info)
}

/// On-screen box of the variant's sprite.
///
/// Fails when the sprite cannot fit its band, or when one step at the
/// variant's speed would cross the whole free span.
pub fn sprite_bounds(variant: &DemoVariant, bundle: &AssetBundle) -> Result<(i32, i32), String> {
    let (w, h) = bundle.sprite_size();
    let bounds = variant.scaled_bounds(w, h);
    let Some((xs, ys)) = SpriteMotion::spawn_area(variant.screen, bounds, variant.band) else {
        return Err(format!(
            "Sprite of {}x{} does not fit a {}x{} screen for variant '{}'",
            bounds.0, bounds.1, variant.screen.w, variant.screen.h, variant.name
        ));
    };
    // A step as long as the free span is always undone and the sprite never moves
    let span = xs.len().min(ys.len());
    if variant.speed as usize >= span {
        return Err(format!(
            "Speed {} must be below {} for a {}x{} sprite in variant '{}'",
            variant.speed, span, bounds.0, bounds.1, variant.name
        ));
    }
    Ok(bounds)
}

/// Pick a uniformly random start position inside the band.
pub fn spawn_position(
    rng: &mut fastrand::Rng,
    screen: ScreenSize,
    bounds: (i32, i32),
    band: VerticalBand,
) -> Result<(i32, i32), String> {
    let (xs, ys) = SpriteMotion::spawn_area(screen, bounds, band).ok_or_else(|| {
        format!(
            "No room for a {}x{} sprite on a {}x{} screen",
            bounds.0, bounds.1, screen.w, screen.h
        )
    })?;
    Ok((rng.i32(xs), rng.i32(ys)))
}

/// Spawn the background and the moving sprite, then start playing.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    variant: Res<DemoVariant>,
    bundle: Res<AssetBundle>,
    config: Res<GameConfig>,
) {
    if let Some(background) = &bundle.background {
        commands.spawn((
            MapPosition::new(0.0, 0.0),
            ZIndex(-1),
            Sprite::new(
                background.key.clone(),
                background.width as f32,
                background.height as f32,
            ),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let spawned = sprite_bounds(&variant, &bundle).and_then(|bounds| {
        spawn_position(&mut rng, variant.screen, bounds, variant.band).map(|pos| (pos, bounds))
    });
    let ((x, y), (w, h)) = match spawned {
        Ok(spawned) => spawned,
        Err(e) => {
            error!("Cannot place sprite: {}", e);
            next_state.set(GameStates::Quitting);
            return;
        }
    };

    let mut motion = SpriteMotion::new(x, y, (w, h), variant.screen, variant.bounce_rules());
    if variant.animated {
        motion = motion.with_animation(bundle.frames().len(), variant.frame_hold);
    }
    let mut sprite = commands.spawn((
        motion,
        MapPosition::from_ints(x, y),
        Sprite::new(bundle.first_frame().key.clone(), w as f32, h as f32),
        ZIndex(0),
    ));
    if variant.animated {
        sprite.insert(Animation::new(WALK_ANIMATION));
    }

    info!(
        "Spawned '{}' sprite {}x{} at ({}, {})",
        variant.name, w, h, x, y
    );
    next_state.set(GameStates::Playing);
}

/// Handle the pause and quit keys.
pub fn update(
    input: Res<InputState>,
    mut clock: ResMut<TickClock>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.action_back.just_pressed {
        info!("Quit requested");
        next_state.set(GameStates::Quitting);
    }
    if input.action_pause.just_pressed {
        let paused = clock.toggle_pause();
        info!("Simulation {}", if paused { "paused" } else { "resumed" });
    }
}
