pub mod ambient;
pub mod audio;
pub mod constants;
pub mod cues;
pub mod error;
pub mod paint;
pub mod particle;
pub mod shapes;
pub mod sparkle;

pub use ambient::*;
pub use audio::*;
pub use cues::*;
pub use error::*;
pub use paint::*;
pub use particle::*;
pub use sparkle::*;
