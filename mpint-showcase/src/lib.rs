use clap::Parser;
use rand::{Rng,SeedableRng};
use rand::rngs::StdRng;
use std::sync::Once;
use mpint::{MpInt,MpIntError,Precision};

/// Decimal value of 458!.
pub const FACTORIAL_458: &str =
  "315586129727328481959620881650604529627252796870466631053939999033233041\
   699526116828656516453934212804207226065062189930669547196466517028926777\
   751737158009136986848823545279974357692393869550378430764749996383936327\
   218544444523890672597029074515972351498777279540793135422445088980546597\
   247633170278963918016479909976889650122991411476291691182893520792901836\
   858641574144366909160917566365461846019264285260403703717059242607438215\
   901615025858897402845130567605508502229600234070674935521632560401775593\
   306349002298070622477761180408980529047223564318193210443964471522151787\
   224993990944462404459732316935915925285126711374195401662764334600354472\
   751521738128450551622427731089616680849773849243322331617093854197101168\
   136427469632897361814206761085532420627128494317141374211836758341181682\
   709885644189287105158085298775669089031439217705916268738168692934864124\
   678925999875203757811199961581478495383034265600000000000000000000000000\
   000000000000000000000000000000000000000000000000000000000000000000000000\
   00000000000000";

/// Command line of the showcase.
#[derive(Debug,Clone,Parser)]
#[command(version, about = "Exercise mpint against native integers", long_about = None)]
pub struct Config {
  /// Random cases per operator.
  #[arg(short, long, default_value_t = 2000)]
  pub iterations: usize,

  /// Seed for the random cases, taken from the OS when missing.
  #[arg(short, long)]
  pub seed: Option<u64>,

  /// Precision of the random cases: a number of bits or `unlimited`.
  #[arg(short, long, default_value = "160", value_parser = parse_precision)]
  pub precision: Precision,
}

pub fn parse_precision(s: &str) -> Result<Precision, String> {
  if s.eq_ignore_ascii_case("unlimited") { return Ok(Precision::Unlimited) }
  let bits: usize = s.parse().map_err(|e| format!("`{}`: {}", s, e))?;
  Precision::bits(bits).map_err(|e| e.to_string())
}

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=mpint=debug`.
pub fn init_tracing() {
  TRACING_INIT.call_once(|| {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
      tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(EnvFilter::from_default_env())
        .init();
    }
  });
}

/// Passed and failed cases.
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct Tally {
  pub passed: usize,
  pub failed: usize
}

impl Tally {
  pub fn record(&mut self, ok: bool) {
    if ok { self.passed += 1 } else { self.failed += 1 }
  }

  pub fn merge(&mut self, other: Tally) {
    self.passed += other.passed;
    self.failed += other.failed;
  }

  pub fn total(&self) -> usize { self.passed + self.failed }

  pub fn is_success(&self) -> bool { self.failed == 0 }
}

fn report(label: &str, ok: bool) {
  println!("{:<40} {}", label, if ok { "ok" } else { "FAILED" });
  if !ok { tracing::debug!(label, "case failed") }
}

fn banner(title: &str) {
  println!();
  println!("---- {} ----", title);
}

fn expect_overflow
  (tally: &mut Tally, label: &str, result: mpint::Result<MpInt>, expect: &str) {
  let ok = match result {
    Err(e) => e.overflow_value().map_or(false, |v| v.to_string() == expect),
    Ok(_)  => false
  };
  report(label, ok);
  tally.record(ok)
}

/// The boundary cases of 64 bit arithmetic.  Each one must overflow and
/// carry the exact result.
pub fn overflow_limits(tally: &mut Tally) {
  banner("overflow limits");
  let bounded = |x| MpInt::from_i64(Precision::Bounded(64), x);
  let (min,max) = (bounded(i64::MIN), bounded(i64::MAX));

  expect_overflow(tally, "max + max", &max + &max, "18446744073709551614");
  expect_overflow(tally, "min + min", &min + &min, "-18446744073709551616");
  expect_overflow(tally, "max - min", &max - &min, "18446744073709551615");
  expect_overflow(tally, "min - max", &min - &max, "-18446744073709551615");
  expect_overflow(tally, "max * max", &max * &max,
                  "85070591730234615847396907784232501249");
  expect_overflow(tally, "min * max", &min * &max,
                  "-85070591730234615856620279821087277056");
  expect_overflow(tally, "max * min", &max * &min,
                  "-85070591730234615856620279821087277056");
  expect_overflow(tally, "min * min", &min * &min,
                  "85070591730234615865843651857942052864");
}

/// Does the result agree with the native one.  An overflow agrees when it
/// carries the native result.
fn agrees(result: mpint::Result<MpInt>, expect: i64) -> bool {
  match result {
    Ok(value) => value.to_i64() == Some(expect),
    Err(MpIntError::Overflow { value, .. }) => value.to_i64() == Some(expect),
    Err(_) => false
  }
}

fn random_operator<R: Rng>
  ( rng: &mut R
  , iterations: usize
  , precision: Precision
  , operands: fn(&mut R) -> (i64,i64)
  , native: fn(i64,i64) -> i64
  , op: fn(&MpInt,&MpInt) -> mpint::Result<MpInt>
  ) -> Tally {
  let mut tally = Tally::default();
  for _ in 0 .. iterations {
    let (a,b) = operands(rng);
    let x = MpInt::from_i64(precision, a);
    let y = MpInt::from_i64(precision, b);
    let ok = agrees(op(&x, &y), native(a, b));
    if !ok { tracing::debug!(a, b, "disagrees with native arithmetic") }
    tally.record(ok);
  }
  tally
}

fn int_operands<R: Rng>(rng: &mut R) -> (i64,i64) {
  (rng.gen::<i32>() as i64, rng.gen::<i32>() as i64)
}

fn short_operands<R: Rng>(rng: &mut R) -> (i64,i64) {
  (rng.gen::<i16>() as i64, rng.gen::<i16>() as i64)
}

fn nonzero_divisor<R: Rng>(rng: &mut R) -> (i64,i64) {
  let a = rng.gen::<i32>() as i64;
  loop {
    let b = rng.gen::<i32>() as i64;
    if b != 0 { return (a, b) }
  }
}

/// Random operands checked against native arithmetic: `+ - /` on 32 bit
/// values and `*` on 16 bit values.
pub fn random_operations<R: Rng>
  (tally: &mut Tally, rng: &mut R, iterations: usize, precision: Precision) {
  banner(&format!("random operations ({})", precision));
  let ops: [(&str, fn(&mut R) -> (i64,i64), fn(i64,i64) -> i64,
             fn(&MpInt,&MpInt) -> mpint::Result<MpInt>); 4] =
    [ ("+", int_operands,    |a,b| a + b, MpInt::try_add)
    , ("-", int_operands,    |a,b| a - b, MpInt::try_sub)
    , ("*", short_operands,  |a,b| a * b, MpInt::try_mul)
    , ("/", nonzero_divisor, |a,b| a / b, MpInt::try_div)
    ];
  for (name,operands,native,op) in ops {
    let t = random_operator(rng, iterations, precision, operands, native, op);
    println!("operator {:<31} {} passed, {} failed", name, t.passed, t.failed);
    tally.merge(t);
  }
}

/// Factorials with known decimal values.
pub fn factorials(tally: &mut Tally) {
  banner("factorials");
  let cases: [(i64,&str); 2] =
    [(23, "25852016738884976640000"), (458, FACTORIAL_458)];
  for (n,expect) in cases {
    let ok = match MpInt::from(n).factorial() {
      Ok(value) => value.to_decimal_string() == expect,
      Err(_)    => false
    };
    report(&format!("{}!", n), ok);
    tally.record(ok)
  }
}

/// Run every phase and print the summary.
pub fn run(config: &Config) -> Tally {
  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None       => StdRng::from_entropy()
  };
  tracing::debug!(?config, "starting showcase");

  let mut tally = Tally::default();
  overflow_limits(&mut tally);
  random_operations(&mut tally, &mut rng, config.iterations, config.precision);
  factorials(&mut tally);

  println!();
  println!("total: {}, passed: {}, failed: {}",
           tally.total(), tally.passed, tally.failed);
  tally
}
