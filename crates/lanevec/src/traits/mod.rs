mod lane;
mod scalar;

pub use lane::*;
pub use scalar::*;
