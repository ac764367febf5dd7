//! Sprite bounce demo entry point.
//!
//! A sprite circulates around the edges of a fixed-size screen, built on:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Three variants are available (see `--list-variants`): an animated knight
//! walking the lower half of a backdrop, the same walk cycle using the whole
//! screen, and a still gopher bouncing around a small window.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, apply command line overrides, resolve the variant
//! 2. Open the raylib window, load textures into the stores
//! 3. Register observers and systems, enter the Setup state which spawns
//!    the sprite
//! 4. Each frame:
//!    - Advance frame time and the fixed-rate tick clock
//!    - Poll input, run the due motion ticks, sync the animation frame
//!    - Render into the fixed-size target and letterbox it into the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --variant walker
//! ```

use std::fmt::Display;
use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use spritebounce::events::bounce::observe_bounce;
use spritebounce::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use spritebounce::events::switchdebug::switch_debug_observer;
use spritebounce::game;
use spritebounce::resources::animationstore::AnimationStore;
use spritebounce::resources::bouncestats::BounceStats;
use spritebounce::resources::gameconfig::GameConfig;
use spritebounce::resources::gamestate::{GameState, GameStates, NextGameState};
use spritebounce::resources::input::InputState;
use spritebounce::resources::rendertarget::{RenderFilter, RenderTarget};
use spritebounce::resources::systemsstore::SystemsStore;
use spritebounce::resources::texturestore::TextureStore;
use spritebounce::resources::tickclock::TickClock;
use spritebounce::resources::variant::{DemoVariant, VARIANT_NAMES};
use spritebounce::resources::windowsize::WindowSize;
use spritebounce::resources::worldtime::WorldTime;
use spritebounce::systems::animation::animation;
use spritebounce::systems::gamestate::{check_pending_state, state_is_playing, state_is_quitting};
use spritebounce::systems::input::update_input_state;
use spritebounce::systems::movement::sprite_motion_system;
use spritebounce::systems::render::render_system;
use spritebounce::systems::time::{update_tick_clock, update_world_time};

/// Bouncing sprite demos
#[derive(Parser)]
#[command(
    version,
    about = "A sprite walking around the edges of the screen, rendered with raylib."
)]
struct Cli {
    /// Demo variant to run: knight, walker or bouncer.
    #[arg(long, value_name = "NAME")]
    variant: Option<String>,

    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory holding the demo images.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Seed for the starting position.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the available variants and exit.
    #[arg(long)]
    list_variants: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

/// Log a fatal startup error and exit with status 1.
fn fail(message: impl Display) -> ! {
    error!("{}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: list presets (no window needed)
    if cli.list_variants {
        for name in VARIANT_NAMES {
            match DemoVariant::preset(name) {
                Ok(variant) => println!("{}", variant),
                Err(e) => fail(e),
            }
        }
        return;
    }

    // --------------- Configuration ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(assets) = cli.assets {
        config.assets_dir = assets;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // Early-exit: persist the effective configuration
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            fail(e);
        }
        return;
    }

    let variant = config.variant().unwrap_or_else(|e| fail(e));
    info!("Starting variant {}", variant);

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size(&variant);
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title(&variant.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as an input action
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut animations = AnimationStore::new();
    let bundle = game::load_assets(
        &mut rl,
        &thread,
        &variant,
        &config.assets_dir,
        &mut textures,
        &mut animations,
    )
    .unwrap_or_else(|e| fail(e));
    if let Err(e) = game::sprite_bounds(&variant, &bundle) {
        fail(e);
    }

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_target = RenderTarget::new(
        &mut rl,
        &thread,
        variant.screen,
        RenderFilter::for_scale(variant.scale),
    )
    .unwrap_or_else(|e| fail(e));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(TickClock::new(config.tps));
    // ScreenSize is the demo's logical resolution
    world.insert_resource(variant.screen);
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(BounceStats::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(animations);
    world.insert_resource(bundle);
    world.insert_resource(variant);
    world.insert_resource(config);

    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));

    let mut systems_store = SystemsStore::new();
    let setup_system_id = world.register_system(game::setup);
    systems_store.insert("setup", setup_system_id);
    world.insert_resource(systems_store);

    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call immediately to enter Setup state

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(observe_bounce));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        game::update
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        sprite_motion_system
            .run_if(state_is_playing)
            .after(game::update),
    );
    update.add_systems(animation.after(sprite_motion_system));
    update.add_systems(render_system.after(animation));

    if let Err(e) = update.initialize(&mut world) {
        fail(format!("Failed to initialize schedule: {}", e));
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !state_is_quitting(&world)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);
        // Ticks are computed before input is handled; pressing pause in
        // game::update cancels this frame's ticks before the motion system runs.
        update_tick_clock(&mut world);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    let stats = *world.resource::<BounceStats>();
    info!(
        "Finished after {} ticks and {} bounces",
        world.resource::<TickClock>().total_ticks,
        stats.total()
    );
}
