//! Fixed-step ray march against the occupancy grid.
//!
//! One ray per screen column, fanned evenly across the field of view.
//! The march is brute force: small fixed steps along the ray direction
//! until a non-zero tile or the range limit. Plenty for arena-sized
//! maps; a DDA grid walk can replace it if maps ever grow, as long as
//! the emitted hit semantics stay the same.

use glam::{Vec2, vec2};

use crate::world::{BOUNDARY, Camera, GridMap};

/// March step in tile-units. Smaller steps catch thin diagonal grazes
/// at the cost of more samples per ray.
pub const STEP_SIZE: f32 = 0.05;

/// Rays are cut off here and turned into boundary hits.
pub const MAX_RANGE: f32 = 20.0;

/// Orientation of the grid-cell edge a ray crossed when it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// An east/west cell edge; lit a touch brighter.
    Vertical,
    /// A north/south cell edge.
    Horizontal,
}

/// One terminated ray. Every cast ray produces exactly one of these;
/// "no hit" is not representable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Perpendicular (fish-eye corrected) distance to the view plane.
    pub distance: f32,
    pub face: Face,
    pub variant: u8,
    /// Fractional coordinate along the hit face, the 1-D texture coordinate.
    pub wall_frac: f32,
}

/// Cast the whole fan for one frame, left to right across `fov`.
/// Always returns exactly `fan_size` hits.
pub fn cast(camera: &Camera, map: &GridMap, fan_size: usize, fov: f32) -> Vec<RayHit> {
    (0..fan_size)
        .map(|i| {
            let theta = camera.yaw - fov * 0.5 + fov * i as f32 / fan_size as f32;
            cast_single(camera, map, theta)
        })
        .collect()
}

/// March one ray at absolute angle `theta`.
pub fn cast_single(camera: &Camera, map: &GridMap, theta: f32) -> RayHit {
    let dir = vec2(theta.cos(), theta.sin());

    let mut dist = 0.0_f32;
    let mut prev = camera.pos;

    let (raw, face, variant, wall_frac) = loop {
        dist += STEP_SIZE;
        let p = camera.pos + dir * dist;
        let (face, frac) = classify(prev, p);

        if !map.in_bounds(p.x, p.y) || dist >= MAX_RANGE {
            // escaped the grid or ran out of range; synthesise a hit at
            // the range cap so the column still gets a slab
            break (MAX_RANGE, face, BOUNDARY, frac);
        }
        let tile = map.tile_at(p.x as i32, p.y as i32);
        if tile != 0 {
            break (dist, face, tile, frac);
        }
        prev = p;
    };

    RayHit {
        distance: raw * (camera.yaw - theta).cos(),
        face,
        variant,
        wall_frac,
    }
}

/// Which cell edge did the step from `prev` to `cur` cross?
///
/// Comparing truncated x-coordinates is an approximation that holds at
/// small step sizes: if the integer column changed, the ray crossed an
/// east/west edge and shows a vertical wall face on screen.
fn classify(prev: Vec2, cur: Vec2) -> (Face, f32) {
    if prev.x.floor() != cur.x.floor() {
        (Face::Vertical, cur.y.rem_euclid(1.0))
    } else {
        (Face::Horizontal, cur.x.rem_euclid(1.0))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
