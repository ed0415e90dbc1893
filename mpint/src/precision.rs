use std::fmt;
use crate::error::{MpIntError,Result};

/// How many bits a value may use after an operation completes.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum Precision {
  /// At most this many bits, sign included.  `Precision::bits` is the
  /// checked constructor; widths below `MIN_BITS` are treated as `MIN_BITS`.
  Bounded(usize),

  /// No limit.
  Unlimited
}

impl Default for Precision {
  fn default() -> Self { Precision::Unlimited }
}

impl Precision {

  /// The smallest bounded precision.
  pub const MIN_BITS: usize = 32;

  /// A bounded precision of the given number of bits.
  pub fn bits(bits: usize) -> Result<Precision> {
    if bits < Self::MIN_BITS { return Err(MpIntError::InvalidPrecision(bits)) }
    Ok(Precision::Bounded(bits))
  }

  /// A bounded precision of the given number of bytes.
  pub fn bytes(bytes: usize) -> Result<Precision> {
    Self::bits(bytes.saturating_mul(8))
  }

  /// The number of bits, `None` when unlimited.
  pub fn limit(self) -> Option<usize> {
    match self {
      Precision::Bounded(bits) => Some(bits),
      Precision::Unlimited     => None
    }
  }

  /// The precision of a result computed from operands of the two precisions.
  /// Unlimited wins over everything, otherwise the wider one wins.
  pub fn combine(self, other: Precision) -> Precision {
    match (self.limit(), other.limit()) {
      (Some(x), Some(y)) => Precision::Bounded(x.max(y)),
      _ => Precision::Unlimited
    }
  }

  /// Can a value whose most significant informative bit is at `top_bit`
  /// be stored in two's complement with this precision.
  pub fn admits(self, top_bit: Option<usize>) -> bool {
    match (self.limit(), top_bit) {
      (None, _) | (_, None)  => true,
      (Some(bits), Some(top)) => top + 1 < bits.max(Self::MIN_BITS)
    }
  }
}

impl fmt::Display for Precision {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Precision::Bounded(bits) => write!(f, "{} bits", bits),
      Precision::Unlimited     => f.write_str("unlimited precision")
    }
  }
}
