pub mod fdr;
pub mod scorer;

pub use fdr::*;
pub use scorer::*;
