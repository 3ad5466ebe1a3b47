//! Dated transaction categories and their lazy emission streams.

use crate::{
    cadence::Cadence,
    curve::TrendCurve,
    error::{LedgerError, LedgerResult},
    payee::PayeePolicy,
    rng::{CategoryRng, CategorySlot},
    types::{Amount, Transaction},
};
use chrono::NaiveDate;
use std::{fmt, str::FromStr};

/// Everything the generator can emit, in fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    Recurring,
    Income,
    Gas,
    Groceries,
    Entertainment,
    Rent,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 6] = [
        Self::Recurring,
        Self::Income,
        Self::Gas,
        Self::Groceries,
        Self::Entertainment,
        Self::Rent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Recurring     => "recurring",
            Self::Income        => "income",
            Self::Gas           => "gas",
            Self::Groceries     => "groceries",
            Self::Entertainment => "entertainment",
            Self::Rent          => "rent",
        }
    }

    /// RNG stream for dated categories. Recurring templates draw nothing.
    pub fn slot(&self) -> Option<CategorySlot> {
        match self {
            Self::Recurring     => None,
            Self::Income        => Some(CategorySlot::Income),
            Self::Gas           => Some(CategorySlot::Gas),
            Self::Groceries     => Some(CategorySlot::Groceries),
            Self::Entertainment => Some(CategorySlot::Entertainment),
            Self::Rent          => Some(CategorySlot::Rent),
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for CategoryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> LedgerResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or(LedgerError::UnknownCategory { name: s.to_string() })
    }
}

/// A dated category: where its payee, amount and next date come from.
#[derive(Debug, Clone)]
pub struct Category {
    pub kind:       CategoryKind,
    pub payee:      PayeePolicy,
    pub curve:      TrendCurve,
    pub multiplier: f64,
    /// Uniform noise bounds applied to every amount, if any.
    pub noise:      Option<(f64, f64)>,
    pub decimals:   u32,
    pub cadence:    Cadence,
    /// Account debited (posted negative).
    pub from:       &'static str,
    /// Account credited (posted positive).
    pub to:         &'static str,
}

impl Category {
    /// Build one entry for `date`. Draw order: payee, then noise.
    pub fn entry(&self, date: NaiveDate, rng: &mut CategoryRng) -> LedgerResult<Transaction> {
        let payee = self.payee.choose(self.kind.name(), date, rng)?;
        let noise = match self.noise {
            Some((lo, hi)) => rng.uniform(lo, hi),
            None => 1.0,
        };
        let base = self.curve.value_at(date)?;
        let amount = Amount::rounded(base * self.multiplier * noise, self.decimals);
        Ok(Transaction::transfer(date, payee, self.from, self.to, amount))
    }

    /// Lazily walk `[start, end)` one entry at a time.
    pub fn stream(&self, start: NaiveDate, end: NaiveDate, rng: CategoryRng) -> CategoryStream<'_> {
        CategoryStream {
            category: self,
            cursor:   start,
            end,
            rng,
            emitted:  0,
            pending:  None,
            done:     false,
        }
    }
}

/// Iterator over one category's entries. Stops after the first error;
/// an entry whose successor date cannot be computed is still yielded.
pub struct CategoryStream<'a> {
    category: &'a Category,
    cursor:   NaiveDate,
    end:      NaiveDate,
    rng:      CategoryRng,
    emitted:  usize,
    pending:  Option<LedgerError>,
    done:     bool,
}

impl CategoryStream<'_> {
    fn fail(&mut self, err: LedgerError) -> Option<LedgerResult<Transaction>> {
        self.done = true;
        log::error!("{}: stopped at {}: {err}", self.rng.name, self.cursor);
        Some(Err(err))
    }
}

impl Iterator for CategoryStream<'_> {
    type Item = LedgerResult<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending.take() {
            return self.fail(err);
        }
        if self.cursor >= self.end {
            self.done = true;
            log::debug!(
                "{}: {} entries, cursor stopped at {}",
                self.rng.name,
                self.emitted,
                self.cursor
            );
            return None;
        }

        let txn = match self.category.entry(self.cursor, &mut self.rng) {
            Ok(txn) => txn,
            Err(e) => return self.fail(e),
        };
        match self.category.cadence.advance(self.cursor, &mut self.rng) {
            Ok(next) => self.cursor = next,
            Err(e) => self.pending = Some(e),
        }
        self.emitted += 1;
        Some(Ok(txn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in CategoryKind::ALL {
            assert_eq!(kind.name().parse::<CategoryKind>().unwrap(), kind);
        }
        assert_eq!(" Gas ".parse::<CategoryKind>().unwrap(), CategoryKind::Gas);
        assert!(matches!(
            "bowling".parse::<CategoryKind>(),
            Err(LedgerError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn only_recurring_has_no_stream() {
        assert_eq!(CategoryKind::Recurring.slot(), None);
        assert_eq!(CategoryKind::Rent.slot(), Some(CategorySlot::Rent));
    }
}
