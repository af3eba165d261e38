//! Game state and the per-frame step.

mod collision;
mod components;
mod hitscan;

pub use collision::{PLAYER_RADIUS, position_blocked, try_move};
pub use components::{Alive, InputCmd, Position};
pub use hitscan::{ENEMY_RADIUS, ShotOutcome, resolve_shot};

use glam::Vec2;
use hecs::{Entity, World};
use smallvec::SmallVec;

use crate::defs;
use crate::world::{Camera, GridMap};

/// Linear speed in tile-units per frame tick.
pub const MOVE_SPEED: f32 = 0.05;
/// Angular speed in radians per frame tick.
pub const TURN_RATE: f32 = 0.03;
/// Points per confirmed kill.
pub const KILL_SCORE: u32 = 100;

/// Everything the per-frame step reads and mutates. Constructed once
/// at startup; [`GameState::reset`] puts it back to the spawn
/// configuration without respawning anything.
pub struct GameState {
    pub map: GridMap,
    pub camera: Camera,
    pub score: u32,
    world: World,
}

impl GameState {
    /// Build the state with the fixed enemy roster from `defs`.
    pub fn new(map: GridMap) -> Self {
        let mut world = World::new();
        for &pos in defs::ENEMY_SPAWNS {
            world.spawn((Position(pos), Alive(true)));
        }
        Self {
            map,
            camera: Camera::new(defs::PLAYER_SPAWN, defs::SPAWN_YAW),
            score: 0,
            world,
        }
    }

    /// Advance one frame: reset, movement, turning, then the trigger.
    ///
    /// Speeds are per frame tick; the simulation is deliberately
    /// coupled to the render rate, there is no fixed-timestep
    /// accumulator.
    pub fn advance(&mut self, cmd: &InputCmd) {
        if cmd.reset {
            self.reset();
        }

        // forward and strafe validate independently, so motion along
        // one axis survives the other being blocked
        if cmd.forward != 0.0 {
            let delta = self.camera.forward() * cmd.forward * MOVE_SPEED;
            self.camera.pos = try_move(self.camera.pos, delta, &self.map);
        }
        if cmd.strafe != 0.0 {
            let delta = self.camera.right() * cmd.strafe * MOVE_SPEED;
            self.camera.pos = try_move(self.camera.pos, delta, &self.map);
        }
        if cmd.turn != 0.0 {
            self.camera.turn(cmd.turn * TURN_RATE);
        }

        if cmd.fire {
            self.fire();
        }
    }

    /// Resolve one trigger pull and apply its effects.
    pub fn fire(&mut self) {
        match resolve_shot(&self.world, &self.camera, &self.map) {
            ShotOutcome::Kill(entity) => {
                if let Ok(mut alive) = self.world.get::<&mut Alive>(entity) {
                    alive.0 = false;
                }
                self.score += KILL_SCORE;
            }
            ShotOutcome::Blocked | ShotOutcome::Missed => {}
        }
    }

    /// Back to spawn: player pose, score, every enemy's alive flag.
    pub fn reset(&mut self) {
        self.camera = Camera::new(defs::PLAYER_SPAWN, defs::SPAWN_YAW);
        self.score = 0;
        for (_, alive) in self.world.query_mut::<&mut Alive>() {
            alive.0 = true;
        }
    }

    /// Snapshot of the enemies still standing.
    pub fn live_enemies(&self) -> SmallVec<[(Entity, Vec2); 8]> {
        self.world
            .query::<(&Position, &Alive)>()
            .iter()
            .filter(|(_, (_, alive))| alive.0)
            .map(|(entity, (pos, _))| (entity, pos.0))
            .collect()
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.live_enemies().len()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn state() -> GameState {
        GameState::new(GridMap::arena())
    }

    #[test]
    fn spawn_configuration() {
        let s = state();
        assert_eq!(s.camera.pos, defs::PLAYER_SPAWN);
        assert_eq!(s.camera.yaw, defs::SPAWN_YAW);
        assert_eq!(s.score, 0);
        assert_eq!(s.alive_count(), defs::ENEMY_SPAWNS.len());
    }

    #[test]
    fn forward_input_moves_along_the_heading() {
        let mut s = state();
        s.advance(&InputCmd {
            forward: 1.0,
            ..Default::default()
        });
        assert!((s.camera.pos.x - (1.5 + MOVE_SPEED)).abs() < 1e-6);
        assert!((s.camera.pos.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn turn_input_spins_in_place() {
        let mut s = state();
        s.advance(&InputCmd {
            turn: -1.0,
            ..Default::default()
        });
        assert_eq!(s.camera.pos, defs::PLAYER_SPAWN);
        assert!((s.camera.yaw - (std::f32::consts::TAU - TURN_RATE)).abs() < 1e-5);
    }

    #[test]
    fn walls_stop_the_player_at_the_padding() {
        let mut s = state();
        s.camera.yaw = std::f32::consts::PI; // face the west rim
        for _ in 0..100 {
            s.advance(&InputCmd {
                forward: 1.0,
                ..Default::default()
            });
        }
        // rim cell centre is at x = 0.5; the pad holds us around 0.8,
        // give or take one movement step of float drift
        assert!(s.camera.pos.x >= 0.8 - 1e-3);
        assert!(s.camera.pos.x <= 0.8 + MOVE_SPEED + 1e-3);
        assert!(!position_blocked(&s.map, s.camera.pos.x, s.camera.pos.y));
    }

    #[test]
    fn fire_kills_and_scores_once() {
        let mut s = state();
        // enemy at (4.5, 1.5) sits dead ahead of the spawn pose
        s.fire();
        assert_eq!(s.alive_count(), 3);
        assert_eq!(s.score, KILL_SCORE);

        // the line is now clear to the rim; nothing else to hit
        s.fire();
        assert_eq!(s.alive_count(), 3);
        assert_eq!(s.score, KILL_SCORE);
    }

    #[test]
    fn occluded_enemy_survives_a_shot() {
        let mut s = state();
        // the pillar at cell (5, 5) stands between this pose and the
        // enemy at (5.5, 4.5) when shooting straight north
        s.camera.pos = vec2(5.5, 7.5);
        s.camera.yaw = 3.0 * std::f32::consts::FRAC_PI_2;
        s.fire();
        assert_eq!(s.alive_count(), defs::ENEMY_SPAWNS.len());
        assert_eq!(s.score, 0);
    }

    #[test]
    fn clearing_the_roster() {
        let mut s = state();
        for &spawn in defs::ENEMY_SPAWNS {
            s.camera.pos = spawn - vec2(0.5, 0.0);
            s.camera.yaw = 0.0;
            s.fire();
        }
        assert_eq!(s.alive_count(), 0);
        assert_eq!(s.score, KILL_SCORE * defs::ENEMY_SPAWNS.len() as u32);
    }

    #[test]
    fn reset_restores_everything() {
        let mut s = state();
        s.fire();
        s.advance(&InputCmd {
            forward: 1.0,
            turn: 1.0,
            ..Default::default()
        });
        assert_ne!(s.camera.pos, defs::PLAYER_SPAWN);
        assert_ne!(s.score, 0);

        s.advance(&InputCmd {
            reset: true,
            ..Default::default()
        });
        assert_eq!(s.camera.pos, defs::PLAYER_SPAWN);
        assert_eq!(s.camera.yaw, defs::SPAWN_YAW);
        assert_eq!(s.score, 0);
        assert_eq!(s.alive_count(), defs::ENEMY_SPAWNS.len());
    }
}
