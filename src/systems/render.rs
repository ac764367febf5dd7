//! Rendering system.
//!
//! Each frame is drawn in two passes:
//! 1. Sprites (sorted by [`ZIndex`]) and the overlays are drawn into the
//!    [`RenderTarget`] at the demo's logical screen size.
//! 2. The render target is scaled into the window with letterboxing.
//!
//! The timing overlay is always visible. While [`DebugMode`] is present the
//! sprite boxes, the top of the vertical band and the bounce counters are
//! drawn on top of it.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::spritemotion::SpriteMotion;
use crate::components::zindex::ZIndex;
use crate::resources::bouncestats::BounceStats;
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tickclock::TickClock;
use crate::resources::windowsize::WindowSize;

const OVERLAY_X: i32 = 10;
const OVERLAY_Y: i32 = 10;
const OVERLAY_FONT_SIZE: i32 = 20;

/// Text of the timing overlay.
pub fn overlay_text(tps: f32, fps: f32, x: i32, y: i32) -> String {
    format!("TPS: {:.2}\nFPS: {:.2}\nX: {} Y: {}", tps, fps, x, y)
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    screen: Res<ScreenSize>,
    window_size: Res<WindowSize>,
    clock: Res<TickClock>,
    stats: Res<BounceStats>,
    debug_mode: Option<Res<DebugMode>>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex)>,
    movers: Query<&SpriteMotion>,
) {
    let fps = rl.get_fps() as f32;

    // Query: (Sprite, Position, ZIndex)
    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(&Sprite, &MapPosition, &ZIndex)> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z)| **z);

    {
        let mut d = rl.begin_texture_mode(&th, &mut render_target.texture);
        d.clear_background(Color::BLACK);

        for (sprite, pos, _z) in to_draw.iter() {
            draw_sprite(&mut d, &textures, sprite, pos);
        }

        if let Some(motion) = movers.iter().next() {
            let text = overlay_text(clock.measured_tps(), fps, motion.x, motion.y);
            d.draw_text(&text, OVERLAY_X, OVERLAY_Y, OVERLAY_FONT_SIZE, Color::WHITE);
        }
        if clock.paused {
            d.draw_text(
                "PAUSED",
                screen.w - 100,
                OVERLAY_Y,
                OVERLAY_FONT_SIZE,
                Color::YELLOW,
            );
        }

        if debug_mode.is_some() {
            draw_debug_overlay(&mut d, &movers, &stats, *screen);
        }
    }

    let src = render_target.source_rect();
    let dest = window_size.calculate_letterbox(*screen);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        &render_target.texture,
        src,
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}

/// Draw one sprite stretched over its box, mirrored when `flip_h` is set.
fn draw_sprite<D: RaylibDraw>(
    d: &mut D,
    textures: &TextureStore,
    sprite: &Sprite,
    pos: &MapPosition,
) {
    let Some(tex) = textures.get(&sprite.tex_key) else {
        return;
    };

    // A negative source width mirrors the texture horizontally
    let tex_w = tex.width as f32;
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: if sprite.flip_h { -tex_w } else { tex_w },
        height: tex.height as f32,
    };
    let dest = Rectangle {
        x: pos.pos.x,
        y: pos.pos.y,
        width: sprite.width,
        height: sprite.height,
    };
    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
}

fn draw_debug_overlay<D: RaylibDraw>(
    d: &mut D,
    movers: &Query<&SpriteMotion>,
    stats: &BounceStats,
    screen: ScreenSize,
) {
    for motion in movers.iter() {
        d.draw_rectangle_lines(motion.x, motion.y, motion.width, motion.height, Color::RED);

        let band_top = motion.min_y();
        if band_top > 0 {
            d.draw_line(0, band_top, screen.w, band_top, Color::GREEN);
        }

        let vel_text = format!(
            "v=({}, {}) frame={} flipped={}",
            motion.vx,
            motion.vy,
            motion.frame(),
            motion.flipped
        );
        d.draw_text(&vel_text, OVERLAY_X, screen.h - 50, 10, Color::LIME);
    }

    let bounce_text = format!(
        "Bounces: {} (L {} R {} T {} B {})",
        stats.total(),
        stats.left,
        stats.right,
        stats.top,
        stats.bottom
    );
    d.draw_text(&bounce_text, OVERLAY_X, screen.h - 30, 10, Color::LIME);
}
