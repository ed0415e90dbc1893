use crate::MpInt;
use crate::core::{Limb,LimbT};

impl MpInt {

  /// Shift by whole limbs, towards the more significant end.
  /// `amt` is in units of limbs.  The top limbs are lost.
  pub fn shift_limbs_left(&mut self, amt: usize) {
    let ws  = self.as_slice_mut();
    let tot = ws.len();
    assert!(amt < tot);

    for i in (amt .. tot).rev() {
      ws[i] = ws[i - amt];
    }
    for w in &mut ws[0 .. amt] { *w = 0 }
  }

  /// Shift by whole limbs, towards the less significant end.
  /// `amt` is in units of limbs.  The vacated limbs get the sign.
  pub fn shift_limbs_right(&mut self, amt: usize) {
    let fill = Limb::fill(self.is_negative());
    let ws   = self.as_slice_mut();
    let tot  = ws.len();
    assert!(amt < tot);

    let todo = tot - amt;
    for i in 0 .. todo {
      ws[i] = ws[i + amt];
    }
    for w in &mut ws[todo .. tot] { *w = fill }
  }

  /// Shift by less than a limb.
  pub fn shift_bits_left(&mut self, amt: usize) {
    assert!(0 < amt && amt < Limb::BITS);

    let other = Limb::BITS - amt;
    let mut acc : LimbT = 0;
    for w in self.as_slice_mut() {
      let x = *w;
      *w = (x << amt) | acc;
      acc = x >> other;
    }
  }

  /// Shift by less than a limb, filling with the sign.
  pub fn shift_bits_right(&mut self, amt: usize) {
    assert!(0 < amt && amt < Limb::BITS);

    let other = Limb::BITS - amt;
    let mut acc : LimbT = Limb::fill(self.is_negative()) << other;
    for w in self.as_slice_mut().iter_mut().rev() {
      let x = *w;
      *w = acc | (x >> amt);
      acc = x << other;
    }
  }

}


/// Multiply by `2^amt`, growing the storage so no informative bit is lost.
/// Shifting by at least the capacity gives 0.
impl std::ops::ShlAssign<usize> for MpInt {

  fn shl_assign(&mut self, amt: usize) {
    if amt >= self.capacity() {
      self.reset();
      return
    }
    if amt == 0 { return }

    let need = self.informative_bits() + amt + 1;
    self.reserve_bits(need);

    let limbs = amt / Limb::BITS;
    let extra = amt % Limb::BITS;
    if limbs != 0 { self.shift_limbs_left(limbs) }
    if extra != 0 { self.shift_bits_left(extra) }
  }
}

/// Divide by `2^amt`, rounding down.
/// Shifting by at least the capacity gives 0.
impl std::ops::ShrAssign<usize> for MpInt {

  fn shr_assign(&mut self, amt: usize) {
    if amt >= self.capacity() {
      self.reset();
      return
    }
    if amt == 0 { return }

    let limbs = amt / Limb::BITS;
    let extra = amt % Limb::BITS;
    if limbs != 0 { self.shift_limbs_right(limbs) }
    if extra != 0 { self.shift_bits_right(extra) }
  }
}

impl std::ops::Shl<usize> for &MpInt {
  type Output = MpInt;

  fn shl(self, amt: usize) -> Self::Output {
    let mut result = self.clone();
    result <<= amt;
    result
  }
}

impl std::ops::Shr<usize> for &MpInt {
  type Output = MpInt;

  fn shr(self, amt: usize) -> Self::Output {
    let mut result = self.clone();
    result >>= amt;
    result
  }
}
