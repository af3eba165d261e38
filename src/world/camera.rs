//! Player view-point in world space.

use std::f32::consts::TAU;

use glam::{Vec2, vec2};

/// Position in tile-units plus heading.
///
/// * Only **yaw** is simulated, there is no pitch.
/// * Yaw stays normalised to `[0, 2pi)`; 0 points east, angles grow
///   toward the positive-y rows of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub yaw: f32,
}

impl Camera {
    pub fn new(pos: Vec2, yaw: f32) -> Self {
        Self {
            pos,
            yaw: yaw.rem_euclid(TAU),
        }
    }

    /// Unit vector pointing where the camera looks on the X-Y plane.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        vec2(c, s)
    }

    /// Unit vector pointing to the camera's right on the X-Y plane.
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        self.forward().perp()
    }

    /// Rotate the heading, keeping yaw normalised.
    pub fn turn(&mut self, delta_yaw: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(TAU);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
