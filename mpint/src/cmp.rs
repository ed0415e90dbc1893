use std::cmp::Ordering;
use crate::MpInt;

impl MpInt {

  /// Equal values, regardless of how many limbs are stored.
  /// The precision is ignored.
  pub fn equal(&self, other: &MpInt) -> bool {
    if self.is_negative() != other.is_negative() { return false }
    let n = self.limbs().max(other.limbs());
    (0 .. n).all(|i| self.limb(i) == other.limb(i))
  }

  /// Values with different signs are ordered by the sign.  For values with
  /// the same sign the bits decide, the first difference from the top wins.
  pub fn compare(&self, other: &MpInt) -> Ordering {
    match (self.is_negative(), other.is_negative()) {
      (true,false) => return Ordering::Less,
      (false,true) => return Ordering::Greater,
      _ => ()
    }
    let n = self.limbs().max(other.limbs());
    for i in (0 .. n).rev() {
      let (lhs,rhs) = (self.limb(i), other.limb(i));
      if lhs == rhs { continue }
      return lhs.cmp(&rhs)
    }
    Ordering::Equal
  }

}

impl PartialEq for MpInt {
  fn eq(&self, other: &Self) -> bool { self.equal(other) }
}

impl Eq for MpInt {}

impl PartialOrd for MpInt {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.compare(other))
  }
}

impl Ord for MpInt {
  fn cmp(&self, other: &Self) -> Ordering { self.compare(other) }
}
