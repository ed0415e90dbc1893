use crate::MpInt;
use crate::arith::ripple_add;
use crate::error::Result;

impl MpInt {

  /// Flip all bits, including the ones past the capacity.
  pub fn not_assign(&mut self) {
    for x in self.as_slice_mut().iter_mut() {
      *x = !*x
    }
    let negative = self.is_negative();
    self.set_negative(!negative)
  }

  fn add_small(&mut self, value: i64) {
    *self = ripple_add(self, &MpInt::from(value), self.precision())
  }

  /// Negate in place: flip all bits then add 1.
  /// The precision is not checked.
  pub fn second_complement(&mut self) {
    self.not_assign();
    self.add_small(1)
  }

  /// Undo `second_complement`: subtract 1 then flip all bits.
  /// The precision is not checked.
  pub fn second_complement_reverse(&mut self) {
    self.add_small(-1);
    self.not_assign()
  }

  /// The absolute value, with the same precision.
  /// The storage grows when needed, the precision is not checked.
  pub fn abs(&self) -> MpInt {
    let mut result = self.clone();
    if result.is_negative() { result.second_complement_reverse() }
    result
  }

  /// The negated value, checked against the precision.
  pub fn negate(&self) -> Result<MpInt> {
    let mut result = self.clone();
    result.second_complement();
    result.checked("negate")
  }
}

impl std::ops::Not for &MpInt {
  type Output = MpInt;
  fn not(self) -> Self::Output {
    let mut result = self.clone();
    result.not_assign();
    result
  }
}

impl std::ops::Not for MpInt {
  type Output = MpInt;
  fn not(mut self) -> Self::Output {
    self.not_assign();
    self
  }
}

impl std::ops::Neg for &MpInt {
  type Output = Result<MpInt>;
  fn neg(self) -> Self::Output { self.negate() }
}

#[cfg(test)]
mod test {
  use crate::{MpInt,MpIntError,Precision};
  use crate::proptest::*;

  #[test]
  fn not() {
    do_test(unary, |x: MpInt| {
      let (xr,a) = x.sem();
      let expect = -a - num::BigInt::from(1_i64);
      Some(num::BigInt::from(&!xr) == expect)
    })
  }

  #[test]
  fn abs() {
    do_test(unary, |x: MpInt| {
      let (xr,a) = x.sem();
      let r = xr.abs();
      Some(!r.is_negative() && num::BigInt::from(&r) == num::abs(a))
    })
  }

  #[test]
  fn double_negation() {
    do_test(unary, |x: MpInt| {
      let (xr,_) = x.sem();
      let y = xr.negate().ok()?;
      Some(y.negate().ok()? == *xr)
    })
  }

  #[test]
  fn negate_zero() {
    let x = MpInt::zero(Precision::Bounded(32));
    assert!(x.negate().unwrap().is_zero());
    assert!(MpInt::from(0_i64).negate().unwrap().is_zero());
  }

  #[test]
  fn negate_min_overflows() {
    let x = MpInt::from_i64(Precision::Bounded(64), i64::MIN);
    match -&x {
      Err(MpIntError::Overflow { value, precision }) => {
        assert_eq!(precision, Precision::Bounded(64));
        assert_eq!(value.to_string(), "9223372036854775808");
      }
      other => panic!("unexpected {:?}", other)
    }
  }

  #[test]
  fn abs_of_min() {
    let x = MpInt::from_i64(Precision::Bounded(64), i64::MIN);
    assert_eq!(x.abs().to_string(), "9223372036854775808");
    assert_eq!(x.abs().precision(), Precision::Bounded(64));
  }

  #[test]
  fn second_complement_round_trip() {
    let mut x = MpInt::from(-1234567_i64);
    x.second_complement_reverse();
    assert_eq!(x, MpInt::from(1234567_i64));
    x.second_complement();
    assert_eq!(x, MpInt::from(-1234567_i64));
  }
}
