use crate::{MpInt,Precision};
use crate::core::{Limb,LimbT};
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl ValueTree for MpInt {
  type Value = MpInt;

  fn current(&self) -> MpInt { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// Values with the given number of stored limbs and an independent sign.
/// Limbs are picked so that sign limbs, zero limbs and small values show up
/// often.
#[derive(Debug)]
pub struct MpIntStrategy { pub precision: Precision, pub limbs: usize }

impl Strategy for MpIntStrategy {
  type Tree  = MpInt;
  type Value = MpInt;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    let mut limbs = Vec::<LimbT>::with_capacity(self.limbs);
    for _ in 0 .. self.limbs {
      limbs.push(match rng.gen_range(0 .. 4) {
        0 => 0,
        1 => Limb::fill(true),
        2 => rng.gen_range(0 .. 1000),
        _ => rng.next_u64()
      })
    }
    let negative = rng.gen_bool(0.5);
    Ok(MpInt::from_parts(self.precision, limbs, negative))
  }
}

impl Arbitrary for MpInt {
  type Parameters = (Precision,usize);
  type Strategy   = MpIntStrategy;

  fn arbitrary_with((precision,limbs): (Precision,usize)) -> Self::Strategy {
    MpIntStrategy { precision: precision, limbs: limbs }
  }
}


/// Run the property for values of up to 4 limbs.
/// The property returns `None` to reject an input.
pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for limbs in 0 ..= 4 {
    let mut cfg: Config = <_>::default();
    cfg.cases = 128;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(limbs);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl MpInt {
  /// The value paired with its meaning.
  pub fn sem<'a>(&'a self) -> (&'a MpInt, num::BigInt) {
    (self, self.into())
  }
}

pub fn pow2(bits: usize) -> num::BigInt {
  let x: num::BigInt = 2_u64.into();
  x.pow(bits as u32)
}

/// Is the value representable in `bits` bits of two's complement.
pub fn fits(bits: usize, x: &num::BigInt) -> bool {
  let lim = pow2(bits - 1);
  -&lim <= *x && *x < lim
}

pub fn unary(limbs: usize) -> StrategyFor<MpInt> {
  arbitrary_with((Precision::Unlimited,limbs))
}

pub fn binary(limbs: usize) -> StrategyFor<(MpInt,MpInt)> {
  arbitrary_with(((Precision::Unlimited,limbs),(Precision::Unlimited,limbs)))
}

pub fn ternary(limbs: usize) -> StrategyFor<(MpInt,MpInt,MpInt)> {
  let p = (Precision::Unlimited,limbs);
  arbitrary_with((p,p,p))
}

/// Two bounded values: one as wide as its storage, one of 64 bits.
pub fn bounded_binary(limbs: usize) -> StrategyFor<(MpInt,MpInt)> {
  let wide = Precision::Bounded((limbs * Limb::BITS).max(Precision::MIN_BITS));
  arbitrary_with(((wide,limbs),(Precision::Bounded(64),1)))
}

/// Two narrow values stored in as many limbs as requested, so the stored
/// part may hold more bits than the precision admits.
pub fn overstored_binary(limbs: usize) -> StrategyFor<(MpInt,MpInt)> {
  arbitrary_with(((Precision::Bounded(32),limbs),(Precision::Bounded(64),limbs)))
}

pub fn native(_limbs: usize) -> StrategyFor<i64> {
  any::<i64>()
}

pub fn word_and<T>(limbs: usize) -> StrategyFor<(MpInt,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with(((Precision::Unlimited,limbs),()))
}
