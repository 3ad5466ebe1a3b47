//! Run configuration and the built-in category profile.
//!
//! Control points, payees, multipliers and cadences are fixed here;
//! only the seed, date range and category selection vary per run.

use crate::{
    cadence::Cadence,
    category::{Category, CategoryKind},
    curve::{ControlPoint, TrendCurve},
    error::{LedgerError, LedgerResult},
    payee::{Era, PayeePolicy},
};
use chrono::NaiveDate;

pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

pub const DEFAULT_END: NaiveDate = match NaiveDate::from_ymd_opt(2015, 7, 30) {
    Some(date) => date,
    None => panic!("invalid default end date"),
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed:       u64,
    pub start:      NaiveDate,
    /// Exclusive: a cursor equal to `end` emits nothing.
    pub end:        NaiveDate,
    pub categories: Vec<CategoryKind>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed:       DEFAULT_SEED,
            start:      DEFAULT_START,
            end:        DEFAULT_END,
            categories: CategoryKind::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn only(mut self, categories: &[CategoryKind]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn includes(&self, kind: CategoryKind) -> bool {
        self.categories.contains(&kind)
    }
}

const GAS_STATIONS: &[&str] = &["BP", "Shell", "Pilot"];
const GROCERS: &[&str] = &["Safeway", "Piggly Wiggly", "Harris Teeter"];
const VENUES: &[&str] = &["Movies 8", "Scoops Lounge", "Karts+"];

const CHECKING: &str = "assets:checking";

fn jan_first(raw: &[(i32, f64)]) -> LedgerResult<Vec<ControlPoint>> {
    raw.iter()
        .map(|&(year, value)| ControlPoint::ymd(year, 1, 1, value))
        .collect()
}

fn ymd(year: i32, month: u32, day: u32) -> LedgerResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(LedgerError::InvalidDate { year, month, day })
}

/// Built-in definition of a dated category. `None` for recurring rules.
pub fn profile(kind: CategoryKind) -> LedgerResult<Option<Category>> {
    let category = match kind {
        CategoryKind::Recurring => return Ok(None),
        CategoryKind::Income => {
            let points = vec![
                ControlPoint::ymd(2000, 1, 1, 100.0)?,
                ControlPoint::ymd(2005, 1, 1, 102.0)?,
                ControlPoint::ymd(2007, 1, 1, 104.0)?,
                ControlPoint::ymd(2009, 1, 1, 105.0)?,
                ControlPoint::ymd(2011, 1, 1, 106.0)?,
                ControlPoint::ymd(2013, 1, 1, 107.0)?,
                ControlPoint::ymd(2016, 1, 1, 110.0)?,
            ];
            Category {
                kind,
                payee:      PayeePolicy::Fixed("me"),
                curve:      TrendCurve::smooth(&points)?,
                multiplier: 1.0,
                noise:      None,
                decimals:   2,
                cadence:    Cadence::EveryDays(4),
                from:       "income",
                to:         CHECKING,
            }
        }
        CategoryKind::Gas => {
            let mut raw = vec![(2000, 2.0)];
            raw.extend((2004..=2016).zip([
                2.5, 2.5, 2.8, 3.5, 4.5, 2.5, 3.0, 4.5, 4.0, 4.0, 3.5, 3.0, 3.5,
            ]));
            Category {
                kind,
                payee:      PayeePolicy::Uniform(GAS_STATIONS),
                curve:      TrendCurve::smooth(&jan_first(&raw)?)?,
                multiplier: 20.0,
                noise:      Some((0.9, 1.1)),
                decimals:   2,
                cadence:    Cadence::RandomDays { min: 7, max_exclusive: 13 },
                from:       CHECKING,
                to:         "expenses:gas",
            }
        }
        CategoryKind::Groceries => Category {
            kind,
            payee:      PayeePolicy::Uniform(GROCERS),
            curve:      TrendCurve::smooth(&jan_first(&[
                (2000, 2.0),
                (2004, 3.0),
                (2009, 4.0),
                (2016, 6.0),
            ])?)?,
            multiplier: 25.0,
            noise:      Some((0.9, 1.1)),
            decimals:   2,
            cadence:    Cadence::RandomDays { min: 7, max_exclusive: 13 },
            from:       CHECKING,
            to:         "expenses:groceries",
        },
        CategoryKind::Entertainment => Category {
            kind,
            payee:      PayeePolicy::Uniform(VENUES),
            curve:      TrendCurve::smooth(&jan_first(&[
                (2000, 1.0),
                (2004, 10.0),
                (2009, 15.0),
                (2016, 6.0),
            ])?)?,
            multiplier: 30.0,
            noise:      Some((0.9, 1.1)),
            decimals:   2,
            cadence:    Cadence::RandomDays { min: 13, max_exclusive: 25 },
            from:       CHECKING,
            to:         "expenses:fun",
        },
        CategoryKind::Rent => Category {
            kind,
            payee:      PayeePolicy::Eras(vec![
                Era {
                    payee:           "Alpine Mgmt",
                    start:           ymd(2000, 1, 1)?,
                    end:             ymd(2005, 1, 1)?,
                    inclusive_start: true,
                },
                Era {
                    payee:           "Clearwater Apartments",
                    start:           ymd(2005, 1, 1)?,
                    end:             ymd(2010, 1, 1)?,
                    inclusive_start: false,
                },
                Era {
                    payee:           "Sound Living",
                    start:           ymd(2010, 1, 1)?,
                    end:             ymd(2016, 1, 1)?,
                    inclusive_start: false,
                },
            ]),
            curve:      TrendCurve::nearest(&jan_first(&[
                (2000, 400.0),
                (2004, 500.0),
                (2009, 700.0),
                (2016, 1500.0),
            ])?)?,
            multiplier: 1.0,
            noise:      None,
            decimals:   0,
            cadence:    Cadence::Monthly,
            from:       CHECKING,
            to:         "expenses:rent",
        },
    };
    category.cadence.validate()?;
    Ok(Some(category))
}
