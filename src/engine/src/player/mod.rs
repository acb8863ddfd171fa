mod builder;
mod player;
mod strength;

pub use builder::*;
pub use player::*;
pub use strength::*;
