mod random;
mod time;

pub use random::*;
pub use time::*;
