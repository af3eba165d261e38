//! Screen-space projection and shading of ray hits.
//!
//! `project` is the geometric half: perpendicular distance in, slab
//! placement and shaded colour out. The texture helpers layer the
//! cosmetic brick pattern on top; their constants are a tuning table,
//! not physics.

use smallvec::SmallVec;

use crate::defs;
use crate::engine::raycast::{Face, RayHit};
use crate::renderer::{DrawCall, LineCmd, RectCmd, Rgb};

/// Projected wall height at unit distance, in pixels.
pub const WALL_SCALE: f32 = 320.0;

/// Shade lost per tile-unit of distance.
const SHADE_DECAY: f32 = 10.0;
/// Darkest a wall gets at range.
const SHADE_FLOOR: f32 = 50.0;
/// Horizontal faces sit in shadow relative to vertical ones.
const FACE_SHADE: f32 = 0.75;
/// Distances clamp here before the height divide.
const MIN_DISTANCE: f32 = 0.01;

/// Slabs at or below this height carry no texture.
const TEXTURE_MIN_HEIGHT: i32 = 12;
/// Minimum slab height for brick bands.
const BRICK_MIN_HEIGHT: i32 = 48;
/// Horizontal strips a banded slab is split into.
const BRICK_ROWS: i32 = 4;
/// Speckle thresholds on the combined fractional value.
const SPECKLE_HI: f32 = 0.85;
const SPECKLE_LO: f32 = 0.10;
/// Brightness multipliers for the three texture effects.
const SPECKLE_BRIGHT: f32 = 1.2;
const SPECKLE_DARK: f32 = 0.85;
const EDGE_BRIGHT: f32 = 1.3;
const BRICK_DARK: f32 = 0.6;

/// One vertical wall strip, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlab {
    pub top: i32,
    pub height: i32,
    pub color: Rgb,
}

/// Project a hit into a vertically centred, distance-shaded slab.
///
/// Pure: the same hit and screen parameters always give the same slab.
pub fn project(hit: &RayHit, screen_h: usize, wall_scale: f32) -> WallSlab {
    let dist = hit.distance.max(MIN_DISTANCE);
    let height = ((wall_scale / dist) as i32).min(screen_h as i32);
    let top = screen_h as i32 / 2 - height / 2;

    let mut shade = (255.0 - dist * SHADE_DECAY).clamp(SHADE_FLOOR, 255.0);
    if hit.face == Face::Horizontal {
        shade *= FACE_SHADE;
    }

    let base = defs::wall_kind(hit.variant).base;
    WallSlab {
        top,
        height,
        color: base.scale(shade / 255.0),
    }
}

/// Brightness perturbation for the slab body, derived from the hit
/// fraction and distance so adjacent columns of the same wall do not
/// shade uniformly. Returns a multiplier around 1.0.
pub fn speckle(hit: &RayHit) -> f32 {
    let combined = (hit.wall_frac * 10.0 + hit.distance).fract();
    if combined > SPECKLE_HI {
        SPECKLE_BRIGHT
    } else if combined < SPECKLE_LO {
        SPECKLE_DARK
    } else {
        1.0
    }
}

/// Extra draw calls layered on one slab: a mortar edge on alternating
/// columns of vertical faces, and up to three darker brick bands whose
/// phase comes from the hit fraction. Slabs too short to read, or 1-px
/// columns, get nothing.
pub fn texture_overlay(
    hit: &RayHit,
    slab: &WallSlab,
    column: usize,
    x: i32,
    strip: i32,
) -> SmallVec<[DrawCall; 4]> {
    let mut calls = SmallVec::new();
    if slab.height <= TEXTURE_MIN_HEIGHT || strip <= 1 {
        return calls;
    }

    if hit.face == Face::Vertical && column % 2 == 0 {
        calls.push(DrawCall::Line(LineCmd {
            x0: x,
            y0: slab.top,
            x1: x,
            y1: slab.top + slab.height - 1,
            width: 1,
            color: slab.color.scale(EDGE_BRIGHT),
        }));
    }

    if slab.height >= BRICK_MIN_HEIGHT {
        // the fraction picks one of three band phases
        let bucket = (hit.wall_frac * 3.0) as i32;
        for row in 1..BRICK_ROWS {
            if (row + bucket) % 2 == 0 {
                continue;
            }
            let y = slab.top + slab.height * row / BRICK_ROWS;
            calls.push(DrawCall::Rect(RectCmd {
                x,
                y,
                w: strip,
                h: 1,
                color: slab.color.scale(BRICK_DARK),
            }));
        }
    }
    calls
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn hit(distance: f32, face: Face) -> RayHit {
        RayHit {
            distance,
            face,
            variant: 1,
            wall_frac: 0.5,
        }
    }

    #[test]
    fn projection_is_pure() {
        let h = hit(3.2, Face::Vertical);
        assert_eq!(project(&h, 600, WALL_SCALE), project(&h, 600, WALL_SCALE));
    }

    #[test]
    fn near_zero_distance_clamps_to_screen() {
        let slab = project(&hit(1e-6, Face::Vertical), 600, WALL_SCALE);
        assert_eq!(slab.height, 600);
        assert_eq!(slab.top, 0);
    }

    #[test]
    fn slabs_are_centred_on_the_horizon() {
        let slab = project(&hit(4.0, Face::Vertical), 600, WALL_SCALE);
        assert_eq!(slab.height, 80);
        assert_eq!(slab.top, 300 - 40);
    }

    #[test]
    fn farther_is_shorter_and_darker() {
        let near = project(&hit(2.0, Face::Vertical), 600, WALL_SCALE);
        let far = project(&hit(12.0, Face::Vertical), 600, WALL_SCALE);
        assert!(far.height < near.height);
        assert!(far.color.r < near.color.r);
    }

    #[test]
    fn horizontal_faces_are_dimmer() {
        let v = project(&hit(5.0, Face::Vertical), 600, WALL_SCALE);
        let h = project(&hit(5.0, Face::Horizontal), 600, WALL_SCALE);
        assert!(h.color.r < v.color.r);
    }

    #[test]
    fn shade_bottoms_out_at_the_floor() {
        let far = project(&hit(30.0, Face::Vertical), 600, WALL_SCALE);
        let base = crate::defs::wall_kind(1).base;
        assert_eq!(far.color, base.scale(SHADE_FLOOR / 255.0));
    }

    #[test]
    fn tiny_slabs_and_thin_columns_skip_texture() {
        let h = hit(0.5, Face::Vertical);
        let slab = project(&h, 600, WALL_SCALE);
        assert!(texture_overlay(&h, &slab, 0, 0, 1).is_empty());

        let short = WallSlab {
            top: 295,
            height: 10,
            color: slab.color,
        };
        assert!(texture_overlay(&h, &short, 0, 0, 6).is_empty());
    }

    #[test]
    fn vertical_faces_get_edge_lines_on_even_columns() {
        let h = hit(2.0, Face::Vertical);
        let slab = project(&h, 600, WALL_SCALE);
        let even = texture_overlay(&h, &slab, 2, 12, 6);
        assert!(
            even.iter()
                .any(|c| matches!(c, DrawCall::Line(l) if l.x0 == 12))
        );
        let odd = texture_overlay(&h, &slab, 3, 18, 6);
        assert!(!odd.iter().any(|c| matches!(c, DrawCall::Line(_))));
    }

    #[test]
    fn tall_slabs_get_brick_bands() {
        let h = hit(2.0, Face::Horizontal);
        let slab = project(&h, 600, WALL_SCALE);
        assert!(slab.height >= BRICK_MIN_HEIGHT);
        let calls = texture_overlay(&h, &slab, 1, 6, 6);
        let bands = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect(_)))
            .count();
        assert!(bands > 0 && bands < BRICK_ROWS as usize);
    }

    #[test]
    fn speckle_is_deterministic_and_bounded() {
        for frac in [0.0, 0.13, 0.5, 0.77, 0.99] {
            let h = RayHit {
                distance: 3.3,
                face: Face::Vertical,
                variant: 1,
                wall_frac: frac,
            };
            let k = speckle(&h);
            assert_eq!(k, speckle(&h));
            assert!((SPECKLE_DARK..=SPECKLE_BRIGHT).contains(&k));
        }
    }
}
