use clap::Parser;
use mpint_showcase::{init_tracing, run, Config};

fn main() -> anyhow::Result<()> {
  init_tracing();
  let config = Config::parse();

  let tally = run(&config);
  if !tally.is_success() {
    anyhow::bail!("{} of {} cases failed", tally.failed, tally.total())
  }
  Ok(())
}
