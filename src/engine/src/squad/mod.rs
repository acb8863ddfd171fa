mod formation;
mod selector;
mod squad;

pub use formation::*;
pub use selector::*;
pub use squad::*;
