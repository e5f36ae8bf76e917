pub mod camera;
pub mod character;
pub mod clock;
pub mod constants;
pub mod controller;
pub mod error;
pub mod flock;
pub mod gesture;
pub mod hud;
pub mod instance;
pub mod orbit;
pub mod schedule;
pub mod section;
pub mod state;
pub mod universe;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use character::*;
pub use clock::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use flock::*;
pub use gesture::*;
pub use hud::*;
pub use instance::*;
pub use orbit::*;
pub use schedule::*;
pub use section::*;
pub use state::*;
pub use universe::*;
