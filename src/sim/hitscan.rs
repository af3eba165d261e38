//! Hit-scan weapon resolution.
//!
//! A single forward scan couples enemy circles and wall occupancy, so
//! occlusion falls out of the step order: whatever the test point
//! reaches first wins, and only one enemy can die per trigger pull.

use glam::Vec2;
use hecs::{Entity, World};
use smallvec::SmallVec;

use crate::sim::{Alive, Position};
use crate::world::{Camera, GridMap};

/// Enemy hit-circle radius in tile-units.
pub const ENEMY_RADIUS: f32 = 0.3;
/// Test point advance per scan step.
const SCAN_STEP: f32 = 0.1;
/// Shots further than this hit nothing.
const SCAN_RANGE: f32 = 10.0;

/// What one trigger pull resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The test point entered this enemy's hit-circle first.
    Kill(Entity),
    /// A wall stopped the shot before any enemy.
    Blocked,
    /// The scan ran out of range.
    Missed,
}

/// March a test point along the camera heading and resolve the shot.
/// Read-only; the caller applies the kill and the score award.
pub fn resolve_shot(world: &World, camera: &Camera, map: &GridMap) -> ShotOutcome {
    // snapshot once, the roster is small and fixed
    let targets: SmallVec<[(Entity, Vec2); 8]> = world
        .query::<(&Position, &Alive)>()
        .iter()
        .filter(|(_, (_, alive))| alive.0)
        .map(|(entity, (pos, _))| (entity, pos.0))
        .collect();

    let dir = camera.forward();
    let mut t = SCAN_STEP;
    while t < SCAN_RANGE {
        let p = camera.pos + dir * t;
        for &(entity, pos) in &targets {
            if pos.distance(p) < ENEMY_RADIUS {
                return ShotOutcome::Kill(entity);
            }
        }
        if map.is_wall(p.x, p.y) {
            return ShotOutcome::Blocked;
        }
        t += SCAN_STEP;
    }
    ShotOutcome::Missed
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
