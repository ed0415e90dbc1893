use crate::MpInt;

impl MpInt {

  /// Iterate over the stored bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) -> TraverseBits<'_> {
    TraverseBits { vec: self, front: 0, back: self.capacity() }
  }

  /// Iterate over the stored bits, starting at the most significant end.
  pub fn iter_bits_msb(&self) -> std::iter::Rev<TraverseBits<'_>> {
    self.iter_bits_lsb().rev()
  }
}

/// Traverse the stored bits of a value.
#[derive(Clone)]
pub struct TraverseBits<'a> {
  vec:   &'a MpInt,
  front: usize,
  back:  usize
}

impl Iterator for TraverseBits<'_> {
  type Item = bool;

  fn next(&mut self) -> Option<Self::Item> {
    if self.front >= self.back { return None }
    let i = self.front;
    self.front += 1;
    Some(self.vec.bit(i))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.back - self.front;
    (n, Some(n))
  }
}

impl DoubleEndedIterator for TraverseBits<'_> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.front >= self.back { return None }
    self.back -= 1;
    Some(self.vec.bit(self.back))
  }
}

impl ExactSizeIterator for TraverseBits<'_> {}
