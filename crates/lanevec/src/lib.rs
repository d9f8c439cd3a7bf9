#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use lanevec_derive::Lane;

mod error;
mod format;
mod hash;
mod kind;
mod layout;
mod locale;
mod register;
mod traits;
mod vector;

pub use error::*;
pub use format::*;
pub use hash::*;
pub use kind::*;
pub use layout::*;
pub use locale::*;
pub use register::*;
pub use traits::*;
pub use vector::*;

/// Width in bytes of the storage block behind every vector.
pub const REGISTER_SIZE: usize = 16;
