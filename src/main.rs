use std::env;

use anyhow::{bail, Context};
use backtrack_match::harness::{Tester, SEED_CASES};
use backtrack_match::{Config, PlusStrategy};
use log::error;

// Usage: backtrack-match [--lazy-plus] [--step-budget <n>]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = parse_args(env::args().skip(1))?;
    let mut tester = Tester::new(config);
    tester.run_all(SEED_CASES);

    for failure in tester.failures() {
        error!("{failure}");
    }
    println!("{}", tester.summary());

    verdict(&tester)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let mut config = Config::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lazy-plus" => config = config.with_plus_strategy(PlusStrategy::Lazy),
            "--step-budget" => {
                let value = args.next().context("--step-budget expects a number")?;
                let budget = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid step budget {value:?}"))?;
                config = config.with_step_budget(Some(budget));
            }
            other => bail!("unexpected argument {other:?}"),
        }
    }
    Ok(config)
}

// Any failed assertion makes the process exit non-zero.
fn verdict(tester: &Tester) -> anyhow::Result<()> {
    if !tester.all_passed() {
        bail!("{} assertion(s) failed", tester.failures().len());
    }
    Ok(())
}
