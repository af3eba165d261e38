//! Player movement validation against the grid.
//!
//! Walls block as padded squares: a candidate position is rejected when
//! it comes within [`PLAYER_RADIUS`] of a wall cell's centre on both
//! axes at once. Square-vs-point rather than circle-vs-square, which is
//! generous on the diagonals but cheap and stable at these speeds.

use glam::Vec2;

use crate::world::GridMap;

/// Half-width of the padding square around wall cells, in tile-units.
pub const PLAYER_RADIUS: f32 = 0.3;

/// Would standing at (x, y) violate the wall padding?
///
/// Checks the 3x3 cell neighbourhood of the candidate. Cells beyond the
/// grid edge count as walls, so the boundary repels like any other.
pub fn position_blocked(map: &GridMap, x: f32, y: f32) -> bool {
    if !map.in_bounds(x, y) {
        return true;
    }
    let col = x as i32;
    let row = y as i32;
    for i in row - 1..=row + 1 {
        for j in col - 1..=col + 1 {
            if map.tile_at(j, i) == 0 {
                continue;
            }
            let dist_x = (x - (j as f32 + 0.5)).abs();
            let dist_y = (y - (i as f32 + 0.5)).abs();
            if dist_x < PLAYER_RADIUS && dist_y < PLAYER_RADIUS {
                return true;
            }
        }
    }
    false
}

/// Advance by `delta` if the destination is clear, otherwise stay put.
/// Rejection is silent and all-or-nothing; there is no wall slide
/// beyond what per-axis input validation already gives.
pub fn try_move(pos: Vec2, delta: Vec2, map: &GridMap) -> Vec2 {
    let cand = pos + delta;
    if position_blocked(map, cand.x, cand.y) {
        pos
    } else {
        cand
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn open_floor_is_clear() {
        let map = GridMap::arena();
        assert!(!position_blocked(&map, 4.5, 6.5));
        assert!(!position_blocked(&map, 1.5, 1.5));
    }

    #[test]
    fn wall_padding_blocks_on_both_axes() {
        let map = GridMap::arena();
        // rim cell (0, 1) has centre (0.5, 1.5)
        assert!(position_blocked(&map, 0.75, 1.5));
        // same x distance but y offset beyond the pad: clear
        assert!(!position_blocked(&map, 0.85, 1.5));
    }

    #[test]
    fn outside_the_grid_is_always_blocked() {
        let map = GridMap::arena();
        assert!(position_blocked(&map, -0.5, 1.5));
        assert!(position_blocked(&map, 3.0, 9.5));
    }

    #[test]
    fn rejected_move_keeps_the_old_position() {
        let map = GridMap::arena();
        let pos = vec2(1.5, 1.5);
        let stay = try_move(pos, vec2(-1.0, 0.0), &map);
        assert_eq!(stay, pos);
    }

    #[test]
    fn accepted_move_lands_clear() {
        let map = GridMap::arena();
        let pos = vec2(1.5, 1.5);
        let moved = try_move(pos, vec2(0.5, 0.5), &map);
        assert_eq!(moved, vec2(2.0, 2.0));
        assert!(!position_blocked(&map, moved.x, moved.y));
    }

    #[test]
    fn every_accepted_candidate_is_clear() {
        // sweep a grid of candidate steps from a few anchors; whatever
        // try_move accepts must itself pass the padding test
        let map = GridMap::arena();
        for anchor in [vec2(1.5, 1.5), vec2(4.5, 4.5), vec2(6.5, 7.5)] {
            for dy in -6..=6 {
                for dx in -6..=6 {
                    let delta = vec2(dx as f32 * 0.25, dy as f32 * 0.25);
                    let out = try_move(anchor, delta, &map);
                    assert!(!position_blocked(&map, out.x, out.y));
                }
            }
        }
    }
}
