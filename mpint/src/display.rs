use std::fmt;
use crate::MpInt;

/// Decimal digits, least significant first, one digit per element.
type Digits = Vec<u8>;

/// `acc += addend`, growing `acc` when the carry runs past its top digit.
fn add_digits(acc: &mut Digits, addend: &[u8]) {
  if acc.len() < addend.len() { acc.resize(addend.len(), 0) }
  let mut carry = 0;
  for (i,slot) in acc.iter_mut().enumerate() {
    let d = *slot + addend.get(i).copied().unwrap_or(0) + carry;
    if d > 9 { *slot = d - 10; carry = 1 } else { *slot = d; carry = 0 }
    if carry == 0 && i + 1 >= addend.len() { break }
  }
  if carry != 0 { acc.push(carry) }
}

/// `acc *= 2`.
fn double_digits(acc: &mut Digits) {
  let mut carry = 0;
  for slot in acc.iter_mut() {
    let d = 2 * *slot + carry;
    if d > 9 { *slot = d - 10; carry = 1 } else { *slot = d; carry = 0 }
  }
  if carry != 0 { acc.push(carry) }
}

impl MpInt {

  /// The decimal digits of the absolute value, without a sign.
  ///
  /// For each bit, from the least significant one, the place value
  /// (a power of 2, kept in decimal) is added to the result when the bit
  /// is set, and is then doubled.
  pub fn magnitude_digits(&self) -> String {
    let magnitude = self.abs();
    let mut result: Digits = Vec::new();
    let mut place:  Digits = vec![1];

    let bits = magnitude.informative_bits();
    for bit in magnitude.iter_bits_lsb().take(bits) {
      if bit { add_digits(&mut result, &place) }
      double_digits(&mut place);
    }

    if result.is_empty() { return "0".to_string() }
    result.iter().rev().map(|&d| char::from(b'0' + d)).collect()
  }

  /// The value in decimal, with a `-` in front of negative values.
  pub fn to_decimal_string(&self) -> String {
    let digits = self.magnitude_digits();
    if self.is_negative() { format!("-{}", digits) } else { digits }
  }

  /// All stored bits, most significant first.  `"0"` when nothing is stored.
  pub fn to_binary_string(&self) -> String {
    if self.capacity() == 0 {
      return "0".to_string() // special case so that we see something.
    }
    self.iter_bits_msb().map(|b| if b { '1' } else { '0' }).collect()
  }
}

impl fmt::Display for MpInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(!self.is_negative(), "", &self.magnitude_digits())
  }
}

impl fmt::Binary for MpInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &self.to_binary_string())
  }
}
