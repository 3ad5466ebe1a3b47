//! gen-ledger: writes a synthetic plain-text ledger to stdout.
//!
//! Usage:
//!   gen-ledger
//!   gen-ledger --seed 12345 --start 2000-01-01 --end 2015-07-30
//!   gen-ledger --only income,rent
//!
//! Logs go to stderr; set RUST_LOG=debug for per-category counts.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ledger_gen_core::{
    category::CategoryKind,
    config::{RunConfig, DEFAULT_SEED},
    generator::LedgerGenerator,
};
use std::env;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let defaults = RunConfig::default();

    let seed = seed_arg(&args)?.unwrap_or(DEFAULT_SEED);
    let start = date_arg(&args, "--start")?.unwrap_or(defaults.start);
    let end = date_arg(&args, "--end")?.unwrap_or(defaults.end);
    let categories = match flag_value(&args, "--only") {
        Some(list) => list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<CategoryKind>)
            .collect::<Result<Vec<_>, _>>()
            .context("parsing --only")?,
        None => defaults.categories.clone(),
    };

    let config = defaults
        .with_seed(seed)
        .with_range(start, end)
        .only(&categories);
    let generator = LedgerGenerator::build(config).context("building generator")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = generator.write_to(&mut out).context("writing ledger")?;

    for (kind, count) in &summary.counts {
        log::info!("  {kind:<14} {count}");
    }
    log::info!("  total          {}", summary.total());
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn seed_arg(args: &[String]) -> Result<Option<u64>> {
    flag_value(args, "--seed")
        .map(|v| {
            v.parse::<u64>()
                .with_context(|| format!("--seed expects an unsigned integer, got '{v}'"))
        })
        .transpose()
}

fn date_arg(args: &[String], flag: &str) -> Result<Option<NaiveDate>> {
    flag_value(args, flag)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{v}'"))
        })
        .transpose()
}
