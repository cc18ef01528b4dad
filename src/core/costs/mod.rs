//! Token cost estimation
//!
//! Turns raw session records and the configured rate table into the cost
//! summary the dashboard renders: daily and monthly buckets, per-model and
//! per-day breakdowns, and a budget verdict.
//!
//! # Module Structure
//!
//! - `report` - Cost report construction and bucketing
//! - `tests` - Test suite for estimation and bucketing

pub mod report;

pub use report::{BudgetStatus, CostReport, Savings};
