//! Synthetic plain-text ledger generator for fixture data.
//!
//! Recurring rules plus dated income, gas, groceries, entertainment and
//! rent entries, with amounts following trend curves fitted to a few
//! control points. Output is reproducible for a given seed.

pub mod cadence;
pub mod category;
pub mod config;
pub mod curve;
pub mod error;
pub mod generator;
pub mod payee;
pub mod recurring;
pub mod rng;
pub mod types;
