//! Engine tick integration tests for motion, animation, time and game state.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use spritebounce::components::animation::Animation;
use spritebounce::components::mapposition::MapPosition;
use spritebounce::components::sprite::Sprite;
use spritebounce::components::spritemotion::{
    BounceRules, Circulation, SpriteMotion, VerticalBand,
};
use spritebounce::components::zindex::ZIndex;
use spritebounce::events::bounce::observe_bounce;
use spritebounce::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use spritebounce::game;
use spritebounce::resources::animationstore::{AnimationResource, AnimationStore};
use spritebounce::resources::assetbundle::{AssetBundle, TextureInfo};
use spritebounce::resources::bouncestats::BounceStats;
use spritebounce::resources::gameconfig::GameConfig;
use spritebounce::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use spritebounce::resources::input::InputState;
use spritebounce::resources::screensize::ScreenSize;
use spritebounce::resources::systemsstore::SystemsStore;
use spritebounce::resources::tickclock::TickClock;
use spritebounce::resources::variant::DemoVariant;
use spritebounce::resources::worldtime::WorldTime;
use spritebounce::systems::animation::animation;
use spritebounce::systems::gamestate::{check_pending_state, state_is_quitting};
use spritebounce::systems::movement::sprite_motion_system;
use spritebounce::systems::time::{update_tick_clock, update_world_time};

const SCREEN: ScreenSize = ScreenSize { w: 1000, h: 740 };

fn rules(band: VerticalBand, flip_on_vertical: bool) -> BounceRules {
    BounceRules {
        speed: 3,
        band,
        circulation: Circulation::Clockwise,
        flip_on_vertical,
    }
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(TickClock::new(60));
    world.insert_resource(BounceStats::default());
    world.insert_resource(AnimationStore::new());
    world.insert_resource(SCREEN);
    world.spawn(Observer::new(observe_bounce));
    world.flush();
    world
}

fn spawn_mover(world: &mut World, motion: SpriteMotion) -> Entity {
    let pos = MapPosition::from_ints(motion.x, motion.y);
    world.spawn((motion, pos)).id()
}

fn run_ticks(world: &mut World, ticks: u32) {
    world.resource_mut::<TickClock>().pending = ticks;
    let mut schedule = Schedule::default();
    schedule.add_systems((sprite_motion_system, animation.after(sprite_motion_system)));
    schedule.run(world);
}

#[test]
fn motion_runs_exactly_the_pending_ticks() {
    let mut world = make_world();
    let motion = SpriteMotion::new(0, 400, (50, 50), SCREEN, rules(VerticalBand::FullScreen, false));
    let entity = spawn_mover(&mut world, motion);

    run_ticks(&mut world, 3);

    let motion = world.get::<SpriteMotion>(entity).unwrap();
    assert_eq!((motion.x, motion.y), (9, 400));
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert_eq!((pos.pos.x, pos.pos.y), (9.0, 400.0));
}

#[test]
fn no_pending_ticks_leaves_sprite_in_place() {
    let mut world = make_world();
    let motion = SpriteMotion::new(20, 30, (50, 50), SCREEN, rules(VerticalBand::FullScreen, false));
    let entity = spawn_mover(&mut world, motion);

    run_ticks(&mut world, 0);

    let motion = world.get::<SpriteMotion>(entity).unwrap();
    assert_eq!((motion.x, motion.y), (20, 30));
}

#[test]
fn every_bounce_is_observed() {
    let mut world = make_world();
    let motion = SpriteMotion::new(945, 400, (50, 50), SCREEN, rules(VerticalBand::FullScreen, false));
    let entity = spawn_mover(&mut world, motion);

    run_ticks(&mut world, 2);

    let stats = *world.resource::<BounceStats>();
    assert_eq!(stats.right, 1);
    assert_eq!(stats.total(), 1);
    let motion = world.get::<SpriteMotion>(entity).unwrap();
    assert_eq!((motion.x, motion.vx, motion.vy), (948, 0, 3));
}

#[test]
fn sprite_walks_the_rim_and_stays_on_screen() {
    let mut world = make_world();
    let motion = SpriteMotion::new(0, 400, (50, 50), SCREEN, rules(VerticalBand::BottomHalf, true));
    let entity = spawn_mover(&mut world, motion);

    for _ in 0..2000 {
        run_ticks(&mut world, 5);
        let pos = world.get::<MapPosition>(entity).unwrap();
        assert!(pos.pos.x >= 0.0 && pos.pos.x < 950.0);
        assert!(pos.pos.y >= 370.0 && pos.pos.y < 690.0);
    }

    let stats = *world.resource::<BounceStats>();
    assert!(stats.left > 0 && stats.right > 0);
    assert!(stats.top > 0 && stats.bottom > 0);
}

#[test]
fn animation_follows_frame_and_flip() {
    let mut world = make_world();
    let mut store = AnimationStore::new();
    store.insert(
        "walk",
        AnimationResource::new(vec!["f0".to_string(), "f1".to_string(), "f2".to_string()]),
    );
    world.insert_resource(store);

    // Moving up from the top of the band: the first tick bounces off the top.
    let motion = SpriteMotion::new(100, 0, (50, 50), SCREEN, rules(VerticalBand::FullScreen, true))
        .with_velocity(0, -3)
        .with_animation(3, 3);
    let entity = world
        .spawn((
            motion,
            MapPosition::from_ints(100, 0),
            Animation::new("walk"),
            Sprite::new("f0", 50.0, 50.0),
        ))
        .id();

    run_ticks(&mut world, 1);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.tex_key, "f0");
    assert!(sprite.flip_h);

    run_ticks(&mut world, 2);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.tex_key, "f1");
    assert!(sprite.flip_h);
}

#[test]
fn frame_time_feeds_the_tick_clock() {
    let mut world = make_world();

    update_world_time(&mut world, 0.06);
    assert_eq!(update_tick_clock(&mut world), 3);
    assert_eq!(world.resource::<TickClock>().pending, 3);
    assert_eq!(world.resource::<WorldTime>().frame_count, 1);

    world.resource_mut::<TickClock>().toggle_pause();
    update_world_time(&mut world, 0.5);
    assert_eq!(update_tick_clock(&mut world), 0);
}

fn make_setup_world(variant: DemoVariant, bundle: AssetBundle, seed: u64) -> World {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.seed = Some(seed);
    world.insert_resource(config);
    world.insert_resource(variant);
    world.insert_resource(bundle);
    world.insert_resource(InputState::default());
    world.insert_resource(TickClock::new(60));
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.spawn(Observer::new(observe_gamestate_change_event));

    let mut systems_store = SystemsStore::new();
    let setup_id = world.register_system(game::setup);
    systems_store.insert("setup", setup_id);
    world.insert_resource(systems_store);
    world.flush();
    world
}

fn enter_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

fn run_check_pending(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(world);
}

#[test]
fn setup_spawns_knight_and_background() {
    let bundle = AssetBundle::new(
        Some(TextureInfo::new(game::BACKGROUND_KEY, 1000, 740)),
        vec![
            TextureInfo::new("frame_00", 587, 707),
            TextureInfo::new("frame_01", 587, 707),
        ],
    )
    .unwrap();
    let mut world = make_setup_world(DemoVariant::knight(), bundle, 42);

    enter_state(&mut world, GameStates::Setup);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Setup);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Playing)
    );

    let mut movers = world.query::<(&SpriteMotion, &Sprite, &Animation, &ZIndex)>();
    let (motion, sprite, anim, z) = movers.single(&world).unwrap();
    assert_eq!((motion.width, motion.height), (146, 176));
    assert!((0..854).contains(&motion.x));
    assert!((370..564).contains(&motion.y));
    assert_eq!(motion.animation.map(|c| c.frame_count()), Some(2));
    assert_eq!(sprite.tex_key, "frame_00");
    assert_eq!(anim.animation_key, game::WALK_ANIMATION);
    assert_eq!(*z, ZIndex(0));

    let mut backgrounds = world.query::<(&Sprite, &ZIndex)>();
    assert!(
        backgrounds
            .iter(&world)
            .any(|(s, z)| s.tex_key == game::BACKGROUND_KEY && *z == ZIndex(-1))
    );

    run_check_pending(&mut world);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
}

#[test]
fn bouncer_has_no_animation() {
    let bundle = AssetBundle::new(None, vec![TextureInfo::new("frame_00", 60, 80)]).unwrap();
    let mut world = make_setup_world(DemoVariant::bouncer(), bundle, 7);

    enter_state(&mut world, GameStates::Setup);

    let mut animated = world.query::<&Animation>();
    assert_eq!(animated.iter(&world).count(), 0);
    let mut movers = world.query::<&SpriteMotion>();
    let motion = movers.single(&world).unwrap();
    assert!(motion.animation.is_none());
    assert!(!motion.rules.flip_on_vertical);
}

#[test]
fn same_seed_same_start() {
    let start = |seed| {
        let bundle = AssetBundle::new(None, vec![TextureInfo::new("frame_00", 60, 80)]).unwrap();
        let mut world = make_setup_world(DemoVariant::bouncer(), bundle, seed);
        enter_state(&mut world, GameStates::Setup);
        let mut movers = world.query::<&SpriteMotion>();
        let motion = movers.single(&world).unwrap();
        (motion.x, motion.y)
    };
    assert_eq!(start(11), start(11));
}

#[test]
fn oversized_sprite_quits_instead_of_playing() {
    let bundle = AssetBundle::new(None, vec![TextureInfo::new("frame_00", 700, 80)]).unwrap();
    let mut world = make_setup_world(DemoVariant::bouncer(), bundle, 1);

    enter_state(&mut world, GameStates::Setup);
    let mut movers = world.query::<&SpriteMotion>();
    assert_eq!(movers.iter(&world).count(), 0);

    run_check_pending(&mut world);
    assert!(state_is_quitting(&world));
}

#[test]
fn pause_and_quit_keys_drive_the_game() {
    let bundle = AssetBundle::new(None, vec![TextureInfo::new("frame_00", 60, 80)]).unwrap();
    let mut world = make_setup_world(DemoVariant::bouncer(), bundle, 3);
    let mut schedule = Schedule::default();
    schedule.add_systems(game::update);

    world.resource_mut::<InputState>().action_pause.just_pressed = true;
    world.resource_mut::<TickClock>().pending = 3;
    schedule.run(&mut world);
    assert!(world.resource::<TickClock>().paused);
    assert_eq!(world.resource::<TickClock>().pending, 0);

    {
        let mut input = world.resource_mut::<InputState>();
        input.action_pause.just_pressed = false;
        input.action_back.just_pressed = true;
    }
    schedule.run(&mut world);
    assert!(world.resource::<TickClock>().paused);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Quitting)
    );

    run_check_pending(&mut world);
    assert!(state_is_quitting(&world));
}
