use crate::{MpInt,Precision};
use crate::core::{Limb,LimbT,BigLimbT};
use crate::error::{MpIntError,Result};

/// The number of limbs an operation on `a` and `b` runs over:
/// their capacity, extended so that both top limbs hold the sign.
fn span(a: &MpInt, b: &MpInt) -> usize {
  a.limbs().max(b.limbs()).max(a.signed_limbs()).max(b.signed_limbs())
}

/// The sign of `result` disagrees with the sign the operands imply,
/// so the carry escaped the top limb.  The stored bits are the true low bits,
/// so flipping the sign and adding a limb of it gives the true value.
fn fix_wrap(result: &mut MpInt) {
  let negative = result.is_negative();
  result.set_negative(!negative);
  let capacity = result.capacity();
  result.expand(capacity);
  tracing::trace!(capacity, "carry out of the top limb, widened");
}

fn top_is_set(limbs: &[LimbT]) -> bool {
  match limbs.last() {
    Some(&w) => w >> (Limb::BITS - 1) == 1,
    None     => false
  }
}

/// Ripple carry addition.  Does not check the precision.
pub(crate) fn ripple_add(a: &MpInt, b: &MpInt, precision: Precision) -> MpInt {
  let n = span(a, b);
  let mut out = Vec::<LimbT>::with_capacity(n + 1);
  let mut acc: BigLimbT = 0;
  for i in 0 .. n {
    acc += a.limb(i) as BigLimbT;
    acc += b.limb(i) as BigLimbT;
    out.push(acc as LimbT);
    acc = acc >> Limb::BITS;
  }
  let negative   = top_is_set(&out);
  let mut result = MpInt::from_parts(precision, out, negative);
  if a.is_negative() == b.is_negative() && negative != a.is_negative() {
    fix_wrap(&mut result)
  }
  result
}

/// Borrow propagating subtraction.  Does not check the precision.
pub(crate) fn ripple_sub(a: &MpInt, b: &MpInt, precision: Precision) -> MpInt {
  let n = span(a, b);
  let mut out = Vec::<LimbT>::with_capacity(n + 1);
  let mut borrow = false;
  for i in 0 .. n {
    let (d1,b1) = a.limb(i).overflowing_sub(b.limb(i));
    let (d2,b2) = d1.overflowing_sub(borrow as LimbT);
    out.push(d2);
    borrow = b1 || b2;
  }
  let negative   = top_is_set(&out);
  let mut result = MpInt::from_parts(precision, out, negative);
  if a.is_negative() != b.is_negative() && negative != a.is_negative() {
    fix_wrap(&mut result)
  }
  result
}

impl MpInt {

  /// Keep this value if it fits its precision, otherwise report an overflow
  /// carrying the value with unlimited precision.
  pub(crate) fn checked(self, op: &'static str) -> Result<MpInt> {
    let precision = self.precision();
    if precision.admits(self.top_bit()) { return Ok(self) }
    tracing::debug!(op, %precision, value = %self, "overflow");
    Err(MpIntError::Overflow {
      value: self.with_precision(Precision::Unlimited),
      precision: precision
    })
  }

  pub fn try_add(&self, rhs: &MpInt) -> Result<MpInt> {
    let precision = self.precision().combine(rhs.precision());
    ripple_add(self, rhs, precision).checked("add")
  }

  pub fn try_sub(&self, rhs: &MpInt) -> Result<MpInt> {
    let precision = self.precision().combine(rhs.precision());
    ripple_sub(self, rhs, precision).checked("sub")
  }

  /// Shift and add on the absolute values.  The operand with fewer
  /// informative bits is scanned, the other one is shifted.
  pub fn try_mul(&self, rhs: &MpInt) -> Result<MpInt> {
    let precision  = self.precision().combine(rhs.precision());
    let mut addend = self.abs();
    let mut scan   = rhs.abs();
    if addend.top_bit() < scan.top_bit() {
      std::mem::swap(&mut addend, &mut scan)
    }

    let mut acc = MpInt::zero(Precision::Unlimited);
    if let Some(top) = scan.top_bit() {
      for i in 0 ..= top {
        if scan.bit(i) { acc = ripple_add(&acc, &addend, Precision::Unlimited) }
        addend <<= 1;
      }
    }

    if self.is_negative() != rhs.is_negative() { acc.second_complement() }
    acc.set_precision(precision);
    acc.checked("mul")
  }

  /// Quotient, rounded towards 0, and remainder, with the sign of `self`.
  /// Neither is checked against the precision.
  ///
  /// The quotient is the number of times the absolute divisor can be
  /// subtracted from the absolute dividend.  Those subtractions are done in
  /// batches: the divisor is shifted to each position from the highest one
  /// down, and one subtraction at shift `k` stands for `2^k` single ones.
  fn long_division(&self, rhs: &MpInt) -> Result<(MpInt,MpInt)> {
    if rhs.is_zero() {
      tracing::debug!(dividend = %self, "division by zero");
      return Err(MpIntError::DivisionByZero)
    }
    let precision = self.precision().combine(rhs.precision());

    let mut rest     = self.abs().with_precision(Precision::Unlimited);
    let divisor      = rhs.abs().with_precision(Precision::Unlimited);
    let divisor_bits = divisor.informative_bits();
    let mut quotient = MpInt::zero(Precision::Unlimited);

    let top = rest.informative_bits().saturating_sub(divisor_bits);
    for k in (0 ..= top).rev() {
      let mut step = divisor.clone();
      step.reserve_bits(divisor_bits + k + 1);
      step <<= k;
      if rest >= step {
        rest = ripple_sub(&rest, &step, Precision::Unlimited);
        quotient.set_bit(k, true);
      }
    }

    if self.is_negative() != rhs.is_negative() { quotient.second_complement() }
    if self.is_negative() { rest.second_complement() }
    quotient.set_precision(precision);
    rest.set_precision(precision);
    Ok((quotient, rest))
  }

  /// Quotient and remainder, both checked against the precision.
  pub fn div_rem(&self, rhs: &MpInt) -> Result<(MpInt,MpInt)> {
    let (quotient,rest) = self.long_division(rhs)?;
    Ok((quotient.checked("div")?, rest.checked("rem")?))
  }

  pub fn try_div(&self, rhs: &MpInt) -> Result<MpInt> {
    let (quotient,_) = self.long_division(rhs)?;
    quotient.checked("div")
  }

  pub fn try_rem(&self, rhs: &MpInt) -> Result<MpInt> {
    let (_,rest) = self.long_division(rhs)?;
    rest.checked("rem")
  }
}

macro_rules! checked_binop {
  ($trait:ident, $method:ident, $imp:ident, $assign:ident) => {
    impl std::ops::$trait<&MpInt> for &MpInt {
      type Output = Result<MpInt>;
      fn $method(self, rhs: &MpInt) -> Self::Output { self.$imp(rhs) }
    }

    impl MpInt {
      /// In place version.  `self` is left unchanged on error.
      pub fn $assign(&mut self, rhs: &MpInt) -> Result<()> {
        *self = self.$imp(rhs)?;
        Ok(())
      }
    }
  };
}

checked_binop!(Add, add, try_add, try_add_assign);
checked_binop!(Sub, sub, try_sub, try_sub_assign);
checked_binop!(Mul, mul, try_mul, try_mul_assign);
checked_binop!(Div, div, try_div, try_div_assign);
checked_binop!(Rem, rem, try_rem, try_rem_assign);
