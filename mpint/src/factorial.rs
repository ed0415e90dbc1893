use crate::{MpInt,Precision};
use crate::error::Result;

impl MpInt {

  /// The product of all integers from 2 up to this value; 1 for anything
  /// smaller than 2.  The product is computed without a precision limit and
  /// then checked against the precision of `self`.
  pub fn factorial(&self) -> Result<MpInt> {
    let one        = MpInt::one(Precision::Unlimited);
    let mut result = MpInt::one(Precision::Unlimited);
    let mut i      = MpInt::from_i64(Precision::Unlimited, 2);
    while i <= *self {
      result = result.try_mul(&i)?;
      i = i.try_add(&one)?;
    }
    tracing::trace!(n = %self, bits = result.informative_bits(), "factorial");
    result.with_precision(self.precision()).checked("factorial")
  }
}
