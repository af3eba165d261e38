//! ECS components and the per-frame input command.

use glam::Vec2;

/// World-space position in tile-units.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

/// Enemies stay spawned for the whole run; death only clears this flag
/// and reset raises it again.
#[derive(Debug, Clone, Copy)]
pub struct Alive(pub bool);

/// One frame of input, already mapped from raw keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: f32, // -1 .. +1
    pub strafe: f32,  // -1 .. +1  (left / right)
    pub turn: f32,    // -1 .. +1  (left / right)
    pub fire: bool,   // held
    pub reset: bool,  // edge-triggered on key-down
}
