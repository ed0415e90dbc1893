pub mod core;
pub mod precision;
pub mod error;
pub mod display;
pub mod conversion;
pub mod iter_bits;
pub mod cmp;
pub mod logic;
pub mod shift;
pub mod arith;
pub mod factorial;

#[cfg(test)]
pub mod proptest;

pub use crate::core::MpInt;
pub use crate::precision::Precision;
pub use crate::error::{MpIntError,Result};
pub use crate::iter_bits::TraverseBits;
