use num::bigint::Sign;
use crate::{MpInt,Precision};
use crate::core::{Limb,LimbT};

impl MpInt {

  pub fn from_i64(precision: Precision, value: i64) -> MpInt {
    MpInt::from_parts(precision, vec![value as LimbT], value < 0)
  }

  pub fn one(precision: Precision) -> MpInt { Self::from_i64(precision, 1) }

  /// A copy of this value with a different precision.
  /// All stored bits and the sign are copied, nothing is checked against
  /// the new precision.
  pub fn with_precision(&self, precision: Precision) -> MpInt {
    let mut result = self.clone();
    result.set_precision(precision);
    result
  }

  /// The value as a native integer, if it fits.
  pub fn to_i64(&self) -> Option<i64> {
    if Precision::Bounded(i64::BITS as usize).admits(self.top_bit()) {
      Some(self.limb(0) as i64)
    } else {
      None
    }
  }

  pub fn from_bigint(precision: Precision, value: &num::BigInt) -> MpInt {
    let negative = value.sign() == Sign::Minus;
    let fill     = if negative { 0xff } else { 0 };
    let bytes    = value.to_signed_bytes_le();
    let limbs    = bytes.chunks(Limb::BITS / 8).map(|chunk| {
                     let mut buf = [fill; Limb::BITS / 8];
                     buf[.. chunk.len()].copy_from_slice(chunk);
                     LimbT::from_le_bytes(buf)
                   }).collect();
    MpInt::from_parts(precision, limbs, negative)
  }
}

impl From<i64> for MpInt {
  fn from(value: i64) -> Self { MpInt::from_i64(Precision::Unlimited, value) }
}

impl From<&MpInt> for num::BigInt {
  fn from(x: &MpInt) -> Self {
    let mut bytes = Vec::<u8>::with_capacity(x.limbs() * Limb::BITS / 8 + 1);
    for w in x.as_slice() {
      bytes.extend_from_slice(&w.to_le_bytes())
    }
    bytes.push(if x.is_negative() { 0xff } else { 0 });
    num::BigInt::from_signed_bytes_le(&bytes)
  }
}


#[cfg(test)]
mod test {
  use crate::{MpInt,Precision};
  use crate::proptest::*;

  #[test]
  fn from_i64() {
    for n in [0_i64, 1, -1, 42, -42, i64::MAX, i64::MIN] {
      let x = MpInt::from_i64(Precision::Bounded(64), n);
      assert_eq!(x.is_negative(), n < 0);
      assert_eq!(x.to_i64(), Some(n));
      for i in 0 .. 64 {
        assert_eq!(x.bit(i), (n >> i) & 1 == 1)
      }
    }
  }

  #[test]
  fn with_precision_copies_bits() {
    let x = MpInt::from_i64(Precision::Bounded(32), -123456789);
    let y = x.with_precision(Precision::Unlimited);
    assert_eq!(y.precision(), Precision::Unlimited);
    assert_eq!(y.as_slice(), x.as_slice());
    assert_eq!(y, x);
  }

  #[test]
  fn to_i64_too_large() {
    let mut x = MpInt::from_i64(Precision::Unlimited, i64::MAX);
    x.set_bit(63, true);
    assert_eq!(x.to_i64(), None);
  }

  #[test]
  fn bigint() {
    do_test(unary, |x: MpInt| {
      let (xr,a) = x.sem();
      Some(MpInt::from_bigint(Precision::Unlimited, &a) == *xr)
    })
  }

  #[test]
  fn i64_to_bigint() {
    for n in [0_i64, 5, -5, i64::MAX, i64::MIN] {
      assert_eq!(num::BigInt::from(&MpInt::from(n)), num::BigInt::from(n))
    }
  }
}
