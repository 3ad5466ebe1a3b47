//! Cursor advancement: how far a category moves between entries.

use crate::{
    error::{LedgerError, LedgerResult},
    rng::CategoryRng,
};
use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Fixed period in days.
    EveryDays(u32),
    /// Random whole-day gap drawn from [min, max_exclusive).
    RandomDays { min: u32, max_exclusive: u32 },
    /// Same day-of-month, next calendar month.
    Monthly,
}

impl Cadence {
    /// Reject cadences that could stall or reverse the cursor.
    pub fn validate(&self) -> LedgerResult<()> {
        match *self {
            Self::EveryDays(0) => Err(LedgerError::InvalidCadence {
                reason: "fixed period must be at least one day".into(),
            }),
            Self::RandomDays { min, max_exclusive } if min == 0 || max_exclusive <= min => {
                Err(LedgerError::InvalidCadence {
                    reason: format!("random gap [{min}, {max_exclusive}) must be non-empty and positive"),
                })
            }
            _ => Ok(()),
        }
    }

    /// Return the next cursor date. Always strictly after `date`.
    pub fn advance(&self, date: NaiveDate, rng: &mut CategoryRng) -> LedgerResult<NaiveDate> {
        match *self {
            Self::EveryDays(days) => add_days(date, days),
            Self::RandomDays { min, max_exclusive } => {
                let days = rng.range(min, max_exclusive);
                add_days(date, days)
            }
            Self::Monthly => next_month(date),
        }
    }
}

/// Past the last representable date is an error, reported on the date
/// that could not be advanced.
fn add_days(date: NaiveDate, days: u32) -> LedgerResult<NaiveDate> {
    date.checked_add_days(Days::new(days as u64))
        .ok_or(LedgerError::InvalidDate {
            year:  date.year(),
            month: date.month(),
            day:   date.day(),
        })
}

/// Hold the day-of-month and roll the year over after December.
/// A day the target month lacks (Jan 31 -> Feb 31) is an error.
fn next_month(date: NaiveDate) -> LedgerResult<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day();
    NaiveDate::from_ymd_opt(year, month, day).ok_or(LedgerError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CategorySlot, RngBank};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_period_steps_exactly() {
        let mut rng = RngBank::new(1).for_slot(CategorySlot::Income);
        let next = Cadence::EveryDays(4).advance(date(2000, 2, 27), &mut rng).unwrap();
        assert_eq!(next, date(2000, 3, 2));
    }

    #[test]
    fn monthly_holds_day_and_rolls_year() {
        let mut rng = RngBank::new(1).for_slot(CategorySlot::Rent);
        assert_eq!(Cadence::Monthly.advance(date(2004, 1, 15), &mut rng).unwrap(), date(2004, 2, 15));
        assert_eq!(Cadence::Monthly.advance(date(2004, 12, 1), &mut rng).unwrap(), date(2005, 1, 1));
    }

    #[test]
    fn monthly_fails_on_missing_day() {
        let mut rng = RngBank::new(1).for_slot(CategorySlot::Rent);
        let err = Cadence::Monthly.advance(date(2001, 1, 31), &mut rng).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate { year: 2001, month: 2, day: 31 }));
    }

    #[test]
    fn random_gap_always_moves_forward() {
        let mut rng = RngBank::new(5).for_slot(CategorySlot::Gas);
        let cadence = Cadence::RandomDays { min: 7, max_exclusive: 13 };
        let mut d = date(2000, 1, 1);
        for _ in 0..500 {
            let next = cadence.advance(d, &mut rng).unwrap();
            let gap = (next - d).num_days();
            assert!((7..=12).contains(&gap), "gap {gap}");
            d = next;
        }
    }

    #[test]
    fn degenerate_cadences_are_rejected() {
        assert!(Cadence::EveryDays(0).validate().is_err());
        assert!(Cadence::RandomDays { min: 0, max_exclusive: 3 }.validate().is_err());
        assert!(Cadence::RandomDays { min: 5, max_exclusive: 5 }.validate().is_err());
        assert!(Cadence::RandomDays { min: 13, max_exclusive: 25 }.validate().is_ok());
        assert!(Cadence::Monthly.validate().is_ok());
    }

    #[test]
    fn stepping_past_the_calendar_end_is_an_error() {
        let mut rng = RngBank::new(1).for_slot(CategorySlot::Gas);
        let near_end = NaiveDate::MAX.pred_opt().unwrap();
        let err = Cadence::EveryDays(4).advance(near_end, &mut rng).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate { .. }), "{err}");

        let random = Cadence::RandomDays { min: 7, max_exclusive: 13 };
        assert!(random.advance(NaiveDate::MAX, &mut rng).is_err());
        assert!(Cadence::Monthly.advance(NaiveDate::MAX, &mut rng).is_err());
    }
}
