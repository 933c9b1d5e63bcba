pub mod squad;
pub mod validator;

pub use squad::*;
pub use validator::*;
