mod camera;
mod grid;

pub use camera::Camera;
pub use grid::{BOUNDARY, GridError, GridMap};
