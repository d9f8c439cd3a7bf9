mod dynamic;
mod fixed;
mod lanes;
mod ops;

pub use dynamic::*;
pub use fixed::*;
pub use lanes::*;
