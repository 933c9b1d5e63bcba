pub mod generator;
pub mod player;
pub mod schedule;

pub use generator::*;
pub use player::*;
pub use schedule::*;
