//! Shared value types for emitted ledger records.

use chrono::NaiveDate;
use std::fmt;

/// A fixed-precision amount: `units / 10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    pub units:    i64,
    pub decimals: u32,
}

impl Amount {
    /// Round `value` half-away-from-zero to `decimals` places.
    pub fn rounded(value: f64, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            units: (value * scale).round() as i64,
            decimals,
        }
    }

    pub fn whole(value: i64) -> Self {
        Self { units: value, decimals: 0 }
    }

    pub fn negated(self) -> Self {
        Self { units: -self.units, ..self }
    }

    pub fn to_f64(self) -> f64 {
        self.units as f64 / 10f64.powi(self.decimals as i32)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let abs = self.units.unsigned_abs();
        if self.decimals == 0 {
            return write!(f, "{sign}${abs}");
        }
        let scale = 10u64.pow(self.decimals);
        write!(
            f,
            "{sign}${}.{:0width$}",
            abs / scale,
            abs % scale,
            width = self.decimals as usize
        )
    }
}

/// One (account, amount) line. An elided amount lets the ledger
/// tool balance the record on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub account: &'static str,
    pub amount:  Option<Amount>,
}

impl Posting {
    pub fn new(account: &'static str, amount: Amount) -> Self {
        Self { account, amount: Some(amount) }
    }

    pub fn elided(account: &'static str) -> Self {
        Self { account, amount: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Dated(NaiveDate),
    /// Periodic rule such as `Monthly from 2000/1/1 to 2010/1/1`.
    Periodic(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub header:   Header,
    pub payee:    Option<&'static str>,
    pub postings: Vec<Posting>,
}

impl Transaction {
    /// A dated record moving `amount` from `from` into `to`.
    pub fn transfer(
        date: NaiveDate,
        payee: &'static str,
        from: &'static str,
        to: &'static str,
        amount: Amount,
    ) -> Self {
        Self {
            header:   Header::Dated(date),
            payee:    Some(payee),
            postings: vec![
                Posting::new(from, amount.negated()),
                Posting::new(to, amount),
            ],
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self.header {
            Header::Dated(date) => Some(date),
            Header::Periodic(_) => None,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.header {
            Header::Dated(date) => write!(f, "{date}")?,
            Header::Periodic(rule) => write!(f, "~{rule}")?,
        }
        if let Some(payee) = self.payee {
            write!(f, " {payee}")?;
        }
        writeln!(f)?;
        for posting in &self.postings {
            match posting.amount {
                Some(amount) => writeln!(f, "  {}   {amount}", posting.account)?,
                None => writeln!(f, "  {}", posting.account)?,
            }
        }
        writeln!(f)
    }
}
