pub mod camera;
pub mod constants;
pub mod coords;
pub mod error;
pub mod grid;
pub mod input;
pub mod points;
pub mod warp;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use coords::*;
pub use error::*;
pub use grid::*;
pub use points::*;
