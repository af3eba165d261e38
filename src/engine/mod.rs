//! The rendering core: ray casting, projection and scene composition.

mod pipeline;
mod projection;
mod raycast;

pub use pipeline::{ViewParams, compose};
pub use projection::{WALL_SCALE, WallSlab, project, speckle, texture_overlay};
pub use raycast::{Face, MAX_RANGE, RayHit, STEP_SIZE, cast, cast_single};
