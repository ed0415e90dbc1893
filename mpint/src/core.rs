// Integers of dynamic size in two's complement form.

use crate::Precision;

pub type LimbT = u64;
pub type BigLimbT = u128;
pub struct Limb();

impl Limb {
  /// The number of bits in a limb.
  pub const BITS: usize = LimbT::BITS as usize;

  /// A limb with all bits set to the given value.
  pub fn fill(value: bool) -> LimbT { if value { LimbT::MAX } else { 0 } }
}

pub fn limbs_for_size(bits: usize) -> usize {
  (bits + Limb::BITS - 1) / Limb::BITS
}

/// A signed integer.
///   * The bits are stored in limbs, least significant limb first.
///   * All bits past the stored limbs are equal to the sign flag,
///     so the stored part may be padded with sign limbs at will.
///   * The precision is only consulted by the arithmetic operations,
///     the storage may be larger than it.
#[derive(Clone, Debug)]
pub struct MpInt {
  limbs:     Vec<LimbT>,
  negative:  bool,
  precision: Precision
}

impl Default for MpInt {
  fn default() -> Self { MpInt::zero(Precision::Unlimited) }
}

impl MpInt {

  /// A 0 with no stored limbs.
  pub fn zero(precision: Precision) -> MpInt {
    MpInt { limbs: Vec::new(), negative: false, precision: precision }
  }

  pub(crate) fn from_parts
    (precision: Precision, limbs: Vec<LimbT>, negative: bool) -> MpInt {
    MpInt { limbs: limbs, negative: negative, precision: precision }
  }

  /// The declared precision of this value.
  pub fn precision(&self) -> Precision { self.precision }

  pub(crate) fn set_precision(&mut self, precision: Precision) {
    self.precision = precision
  }

  pub fn is_negative(&self) -> bool { self.negative }

  /// Change the sign flag.  This also changes the value of all
  /// bits past the current capacity.
  pub fn set_negative(&mut self, value: bool) { self.negative = value }

  /// How many limbs are stored.
  pub fn limbs(&self) -> usize { self.limbs.len() }

  /// The stored limbs, least significant first.
  pub fn as_slice(&self) -> &[LimbT] { &self.limbs }

  pub(crate) fn as_slice_mut(&mut self) -> &mut [LimbT] { &mut self.limbs }

  /// The number of stored bits.  Can be larger than the precision.
  pub fn capacity(&self) -> usize { self.limbs.len() * Limb::BITS }

  /// The limb at the given index.  Limbs past the stored ones are
  /// made of copies of the sign.
  pub fn limb(&self, index: usize) -> LimbT {
    match self.limbs.get(index) {
      Some(&w) => w,
      None     => Limb::fill(self.negative)
    }
  }

  /// The bit at the given position, the sign for positions past the capacity.
  pub fn bit(&self, position: usize) -> bool {
    self.limb(position / Limb::BITS) & (1 << (position % Limb::BITS)) != 0
  }

  /// Set the bit at the given position, growing the storage if needed.
  pub fn set_bit(&mut self, position: usize, value: bool) {
    self.reserve_bits(position + 1);
    let bit = 1 << (position % Limb::BITS);
    let w   = &mut self.limbs[position / Limb::BITS];
    if value { *w |= bit } else { *w &= !bit }
  }

  /// Make sure that at least `bits` bits are stored.
  /// New limbs are copies of the sign, so the value does not change.
  pub(crate) fn reserve_bits(&mut self, bits: usize) {
    let need = limbs_for_size(bits);
    if need > self.limbs.len() {
      self.limbs.resize(need, Limb::fill(self.negative))
    }
  }

  /// Add a limb if `from` is at a limb boundary, then overwrite all bits
  /// from `from` up to the capacity with the sign.
  pub(crate) fn expand(&mut self, from: usize) {
    self.reserve_bits(from);
    if from % Limb::BITS == 0 {
      self.limbs.push(Limb::fill(self.negative))
    }
    let fill = Limb::fill(self.negative);
    let first = from / Limb::BITS;
    let keep  = from % Limb::BITS;
    if keep != 0 {
      let mask = LimbT::MAX << keep;
      let w    = &mut self.limbs[first];
      *w = (*w & !mask) | (fill & mask);
    }
    let start = if keep == 0 { first } else { first + 1 };
    for w in &mut self.limbs[start ..] { *w = fill }
  }

  /// Reset to 0, dropping the stored limbs.
  pub fn reset(&mut self) {
    self.limbs.clear();
    self.negative = false;
  }

  pub fn is_zero(&self) -> bool {
    !self.negative && self.limbs.iter().all(|&w| w == 0)
  }

  /// The position of the most significant bit that differs from the sign.
  /// `None` if there is no such bit, i.e., the value is 0 or -1.
  pub fn top_bit(&self) -> Option<usize> {
    let fill = Limb::fill(self.negative);
    for (i,&w) in self.limbs.iter().enumerate().rev() {
      let diff = w ^ fill;
      if diff != 0 {
        return Some(i * Limb::BITS + (Limb::BITS - 1 - diff.leading_zeros() as usize))
      }
    }
    None
  }

  /// The number of bits needed for the magnitude, without the sign.
  pub fn informative_bits(&self) -> usize {
    self.top_bit().map_or(0, |t| t + 1)
  }

  /// The number of limbs that hold all informative bits and at least
  /// one copy of the sign.
  pub(crate) fn signed_limbs(&self) -> usize {
    limbs_for_size(self.informative_bits() + 1)
  }

}
