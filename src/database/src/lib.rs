pub mod generators;
pub mod loaders;
pub mod world;

pub use generators::*;
pub use loaders::*;
pub use world::*;
