//! Token cost estimation and bucketing
//!
//! Session token counts are combined input and output, so a session's cost
//! is estimated with the model's blended per-million-token rate. Buckets
//! use UTC day boundaries throughout.

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::PricingConfig;
use crate::core::sessions::Session;
use crate::utils::time::day_key;

/// Days shown in the spend trend
const TREND_DAYS: usize = 7;

/// Spend relative to the configured target and ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    /// Month-to-date spend is at or below the target
    UnderBudget,
    /// Spend has passed the target but not the ceiling
    AtTarget,
    /// Spend has passed the ceiling
    OverBudget,
}

/// Savings banner surfaced alongside the cost figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Where the savings come from
    pub description: String,
    /// Estimated amount saved in USD
    pub amount: f64,
    /// Period the amount applies to
    pub period: String,
}

/// Cost summary served to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Estimated spend since UTC midnight, USD
    pub today: f64,
    /// Estimated spend since the 1st of the month, USD
    pub this_month: f64,
    /// Configured monthly target, USD
    pub monthly_target: f64,
    /// Configured monthly ceiling, USD
    pub monthly_budget: f64,
    /// Savings banner
    pub savings: Savings,
    /// Lifetime spend per short model name
    pub cost_breakdown: BTreeMap<String, f64>,
    /// Spend per UTC day, most recent days, ascending
    pub daily_trend: BTreeMap<String, f64>,
    /// Month-to-date spend relative to target and ceiling
    pub budget_status: BudgetStatus,
    /// Today's spend extrapolated over 30 days, USD
    pub projected_monthly: f64,
    /// When this report was built
    pub timestamp: DateTime<Utc>,
    /// Present when the session source failed and the report is zeroed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CostReport {
    /// Estimate costs from raw sessions.
    ///
    /// Sessions without a model or without tokens contribute nothing. The
    /// budget verdict compares unrounded month-to-date spend; all surfaced
    /// currency values are rounded to cents.
    pub fn build(sessions: &[Session], pricing: &PricingConfig, now: DateTime<Utc>) -> Self {
        let day = now.date_naive();
        let day_start = day.and_time(NaiveTime::MIN).and_utc();
        let month_start = day
            .with_day(1)
            .unwrap_or(day)
            .and_time(NaiveTime::MIN)
            .and_utc();

        let mut today = 0.0;
        let mut this_month = 0.0;
        let mut by_model: BTreeMap<String, f64> = BTreeMap::new();
        let mut by_day: BTreeMap<String, f64> = BTreeMap::new();

        for session in sessions {
            let Some(model) = session.model.as_deref() else {
                continue;
            };
            if session.total_tokens == 0 {
                continue;
            }

            let rate = pricing.rate_for(model);
            let cost = session.total_tokens as f64 / 1_000_000.0 * rate.blended();
            let updated = session.updated_at_utc();

            if updated >= day_start {
                today += cost;
            }
            if updated >= month_start {
                this_month += cost;
            }

            let label = session.model_short().unwrap_or(model).to_string();
            *by_model.entry(label).or_insert(0.0) += cost;
            *by_day.entry(day_key(updated)).or_insert(0.0) += cost;
        }

        let budget_status = if this_month > pricing.monthly_budget {
            BudgetStatus::OverBudget
        } else if this_month > pricing.monthly_target {
            BudgetStatus::AtTarget
        } else {
            BudgetStatus::UnderBudget
        };

        let daily_trend = by_day
            .iter()
            .rev()
            .take(TREND_DAYS)
            .map(|(k, v)| (k.clone(), round2(*v)))
            .collect();
        let cost_breakdown = by_model.into_iter().map(|(k, v)| (k, round2(v))).collect();

        Self {
            today: round2(today),
            this_month: round2(this_month),
            monthly_target: pricing.monthly_target,
            monthly_budget: pricing.monthly_budget,
            savings: Savings::from_config(pricing),
            cost_breakdown,
            daily_trend,
            budget_status,
            projected_monthly: round2(today * 30.0),
            timestamp: now,
            error: None,
        }
    }

    /// Zeroed report for when the session source is unavailable
    pub fn unavailable(
        pricing: &PricingConfig,
        error: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            today: 0.0,
            this_month: 0.0,
            monthly_target: pricing.monthly_target,
            monthly_budget: pricing.monthly_budget,
            savings: Savings::from_config(pricing),
            cost_breakdown: BTreeMap::new(),
            daily_trend: BTreeMap::new(),
            budget_status: BudgetStatus::UnderBudget,
            projected_monthly: 0.0,
            timestamp: now,
            error: Some(error.into()),
        }
    }
}

impl Savings {
    fn from_config(pricing: &PricingConfig) -> Self {
        Self {
            description: pricing.savings.description.clone(),
            amount: pricing.savings.amount,
            period: pricing.savings.period.clone(),
        }
    }
}

/// Round a currency value to cents
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
