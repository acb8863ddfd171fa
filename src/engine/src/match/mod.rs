mod engine;
mod events;
mod generator;
mod man_of_the_match;
mod narrative;
mod request;
mod result;
mod stats;

pub use engine::*;
pub use events::*;
pub use generator::*;
pub use man_of_the_match::*;
pub use narrative::*;
pub use request::*;
pub use result::*;
pub use stats::*;
