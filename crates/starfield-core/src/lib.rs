pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod pacing;
pub mod particle;
pub mod renderer;
pub mod signals;
pub mod surface;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use pacing::*;
pub use particle::*;
pub use renderer::*;
pub use signals::*;
pub use surface::*;
