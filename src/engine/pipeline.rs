//! Per-frame scene composition.
//!
//! Turns the game state into an ordered list of draw calls: ceiling and
//! floor fills, one shaded wall slab per fan column, the weapon and
//! crosshair overlay, enemy billboards, then HUD text. Painter order,
//! back to front.

use std::f32::consts::PI;

use crate::engine::{projection, raycast};
use crate::renderer::{DrawCall, LineCmd, RectCmd, Rgb, TextCmd};
use crate::sim::GameState;

const CEILING: Rgb = Rgb::new(100, 100, 100);
const FLOOR: Rgb = Rgb::new(50, 50, 50);
const ENEMY: Rgb = Rgb::new(255, 0, 0);
const WEAPON: Rgb = Rgb::new(139, 69, 19);
const HUD: Rgb = Rgb::new(255, 255, 255);
const VICTORY: Rgb = Rgb::new(0, 255, 0);

/// Billboards beyond this range are not drawn.
const SPRITE_RANGE: f32 = 12.0;
/// Billboard size at unit distance, in pixels.
const SPRITE_SCALE: f32 = 800.0;
/// Billboard size cap, in pixels.
const SPRITE_MAX_PX: f32 = 100.0;
/// HUD font dot size in pixels.
const HUD_PX: i32 = 4;

/// Fixed per-run view configuration.
#[derive(Clone, Copy, Debug)]
pub struct ViewParams {
    pub width: usize,
    pub height: usize,
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Rays cast per frame, one per wall strip.
    pub fan_size: usize,
    /// Projected wall height at unit distance, in pixels.
    pub wall_scale: f32,
}

impl ViewParams {
    /// Pixel width of one wall strip. Integer division; a fan that does
    /// not divide the width leaves a dead margin at the right edge.
    #[inline]
    pub fn strip_width(&self) -> i32 {
        (self.width / self.fan_size).max(1) as i32
    }
}

/// Compose one frame.
pub fn compose(state: &GameState, view: &ViewParams) -> Vec<DrawCall> {
    let mut calls = Vec::with_capacity(view.fan_size * 2 + 16);
    let w = view.width as i32;
    let h = view.height as i32;

    // flat-coloured ceiling and floor, no perspective
    calls.push(DrawCall::Rect(RectCmd {
        x: 0,
        y: 0,
        w,
        h: h / 2,
        color: CEILING,
    }));
    calls.push(DrawCall::Rect(RectCmd {
        x: 0,
        y: h / 2,
        w,
        h: h - h / 2,
        color: FLOOR,
    }));

    let strip = view.strip_width();
    let hits = raycast::cast(&state.camera, &state.map, view.fan_size, view.fov);
    for (column, hit) in hits.iter().enumerate() {
        let slab = projection::project(hit, view.height, view.wall_scale);
        let x = column as i32 * strip;
        calls.push(DrawCall::Rect(RectCmd {
            x,
            y: slab.top,
            w: strip,
            h: slab.height,
            color: slab.color.scale(projection::speckle(hit)),
        }));
        calls.extend(projection::texture_overlay(hit, &slab, column, x, strip));
    }

    weapon_overlay(w, h, &mut calls);
    billboards(state, view, &mut calls);
    hud(state, w, h, &mut calls);

    calls
}

fn weapon_overlay(w: i32, h: i32, calls: &mut Vec<DrawCall>) {
    calls.push(DrawCall::Rect(RectCmd {
        x: w / 2 - 20,
        y: h - 100,
        w: 40,
        h: 100,
        color: WEAPON,
    }));
    calls.push(DrawCall::Line(LineCmd {
        x0: w / 2 - 10,
        y0: h / 2,
        x1: w / 2 + 10,
        y1: h / 2,
        width: 2,
        color: HUD,
    }));
    calls.push(DrawCall::Line(LineCmd {
        x0: w / 2,
        y0: h / 2 - 10,
        x1: w / 2,
        y1: h / 2 + 10,
        width: 2,
        color: HUD,
    }));
}

/// Flat squares scaled by distance, centred on the horizon. Billboards
/// are not clipped against walls; the hit-scan handles occlusion for
/// gameplay, the picture stays honest enough for an arena this small.
fn billboards(state: &GameState, view: &ViewParams, calls: &mut Vec<DrawCall>) {
    let cam = &state.camera;
    let half_fov = view.fov * 0.5;
    let half_w = view.width as f32 * 0.5;

    for (_, pos) in state.live_enemies() {
        let delta = pos - cam.pos;
        let mut rel = delta.y.atan2(delta.x) - cam.yaw;
        while rel > PI {
            rel -= 2.0 * PI;
        }
        while rel < -PI {
            rel += 2.0 * PI;
        }
        if rel.abs() >= half_fov {
            continue;
        }
        let dist = delta.length();
        if dist >= SPRITE_RANGE {
            continue;
        }
        let size = (SPRITE_SCALE / dist).min(SPRITE_MAX_PX) as i32;
        let x = (half_w + rel / half_fov * half_w) as i32 - size / 2;
        let y = view.height as i32 / 2 - size / 2;
        calls.push(DrawCall::Rect(RectCmd {
            x,
            y,
            w: size,
            h: size,
            color: ENEMY,
        }));
    }
}

fn hud(state: &GameState, w: i32, h: i32, calls: &mut Vec<DrawCall>) {
    let alive = state.alive_count();
    calls.push(DrawCall::Text(TextCmd {
        x: 10,
        y: 10,
        px: HUD_PX,
        text: format!("SCORE: {}", state.score),
        color: HUD,
    }));
    calls.push(DrawCall::Text(TextCmd {
        x: 10,
        y: 50,
        px: HUD_PX,
        text: format!("ENEMIES: {alive}"),
        color: HUD,
    }));
    if alive == 0 {
        calls.push(DrawCall::Text(TextCmd {
            x: w / 2 - 80,
            y: h / 2,
            px: HUD_PX,
            text: "YOU WIN!".into(),
            color: VICTORY,
        }));
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
