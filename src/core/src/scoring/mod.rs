pub mod chemistry;
pub mod engine;

pub use chemistry::*;
pub use engine::*;
