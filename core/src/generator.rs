//! The ledger generator: wires categories to RNG streams and emits them.
//!
//! EMISSION ORDER (fixed, never reordered):
//!   1. Recurring `~` rules
//!   2. Income
//!   3. Gas
//!   4. Groceries
//!   5. Entertainment
//!   6. Rent
//!
//! RULES:
//!   - Each category walks its own cursor over [start, end).
//!   - Categories never read each other's state.
//!   - All randomness flows through the RngBank.
//!   - The first error stops emission; anything already written stays.

use crate::{
    category::{Category, CategoryKind},
    config::{profile, RunConfig},
    error::LedgerResult,
    recurring,
    rng::RngBank,
    types::Transaction,
};
use std::{collections::BTreeMap, io::Write};

type Section<'a> = Box<dyn Iterator<Item = LedgerResult<Transaction>> + 'a>;

/// Per-category record counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub counts: BTreeMap<CategoryKind, usize>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

pub struct LedgerGenerator {
    pub config: RunConfig,
    rng_bank:   RngBank,
    recurring:  bool,
    categories: Vec<Category>,
}

impl LedgerGenerator {
    /// Build a generator for every selected category, in emission order.
    pub fn build(config: RunConfig) -> LedgerResult<Self> {
        let mut categories = Vec::new();
        for kind in CategoryKind::ALL.into_iter().filter(|k| config.includes(*k)) {
            if let Some(category) = profile(kind)? {
                categories.push(category);
            }
        }

        if config.start >= config.end {
            log::warn!(
                "empty range {}..{}: no dated entries will be emitted",
                config.start,
                config.end
            );
        }
        log::info!(
            "seed={} range={}..{} categories={}",
            config.seed,
            config.start,
            config.end,
            categories.len() + usize::from(config.includes(CategoryKind::Recurring))
        );

        Ok(Self {
            rng_bank: RngBank::new(config.seed),
            recurring: config.includes(CategoryKind::Recurring),
            categories,
            config,
        })
    }

    /// Selected kinds in emission order.
    pub fn kinds(&self) -> Vec<CategoryKind> {
        let mut kinds = Vec::with_capacity(self.categories.len() + 1);
        if self.recurring {
            kinds.push(CategoryKind::Recurring);
        }
        kinds.extend(self.categories.iter().map(|c| c.kind));
        kinds
    }

    /// Lazy record stream for one kind, or `None` if it was not selected.
    pub fn section(&self, kind: CategoryKind) -> Option<Section<'_>> {
        if kind == CategoryKind::Recurring {
            return self
                .recurring
                .then(|| Box::new(recurring::templates().into_iter().map(Ok)) as Section<'_>);
        }
        let category = self.categories.iter().find(|c| c.kind == kind)?;
        let slot = kind.slot()?;
        let rng = self.rng_bank.for_slot(slot);
        Some(Box::new(category.stream(self.config.start, self.config.end, rng)))
    }

    /// Every record of the run, in emission order. Ends right after the
    /// first error, whichever category raised it.
    pub fn transactions(&self) -> impl Iterator<Item = LedgerResult<Transaction>> + '_ {
        self.kinds()
            .into_iter()
            .filter_map(move |kind| self.section(kind))
            .flatten()
            .scan(false, |failed, item| {
                if *failed {
                    return None;
                }
                *failed = item.is_err();
                Some(item)
            })
    }

    /// Write the whole ledger to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> LedgerResult<RunSummary> {
        let mut summary = RunSummary::default();
        for kind in self.kinds() {
            let Some(section) = self.section(kind) else {
                continue;
            };
            let mut count = 0;
            for txn in section {
                write!(out, "{}", txn?)?;
                count += 1;
            }
            log::debug!("{kind}: wrote {count} records");
            summary.counts.insert(kind, count);
        }
        out.flush()?;
        Ok(summary)
    }

    /// Render the whole ledger into a string.
    pub fn render(&self) -> LedgerResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
