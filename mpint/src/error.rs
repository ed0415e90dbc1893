use thiserror::Error;
use crate::{MpInt,Precision};

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum MpIntError {
  /// The result does not fit the declared precision.
  /// `value` is the exact result, with unlimited precision.
  #[error("overflow: {value} does not fit in {precision}")]
  Overflow { value: MpInt, precision: Precision },

  #[error("division by zero")]
  DivisionByZero,

  #[error("a precision of {0} bits is below the minimum of {min} bits",
          min = Precision::MIN_BITS)]
  InvalidPrecision(usize)
}

pub type Result<T> = std::result::Result<T, MpIntError>;

impl MpIntError {

  /// The true result carried by an overflow.
  pub fn overflow_value(&self) -> Option<&MpInt> {
    match self {
      MpIntError::Overflow { value, .. } => Some(value),
      _ => None
    }
  }

  pub fn into_overflow_value(self) -> Option<MpInt> {
    match self {
      MpIntError::Overflow { value, .. } => Some(value),
      _ => None
    }
  }
}
