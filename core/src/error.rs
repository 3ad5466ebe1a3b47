use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date {date} is outside the curve domain [{first}, {last}]")]
    OutOfDomain {
        date:  NaiveDate,
        first: NaiveDate,
        last:  NaiveDate,
    },

    #[error("Invalid curve: {reason}")]
    InvalidCurve { reason: String },

    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid cadence: {reason}")]
    InvalidCadence { reason: String },

    #[error("No payee covers {date} for category '{category}'")]
    NoPayee { category: &'static str, date: NaiveDate },

    #[error("Unknown category '{name}'")]
    UnknownCategory { name: String },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
