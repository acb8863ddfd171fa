mod ratings;

pub use ratings::*;
