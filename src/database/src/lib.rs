mod entity;
mod error;
mod loaders;

pub use entity::*;
pub use error::*;
pub use loaders::*;
