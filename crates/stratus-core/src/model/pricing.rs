/// Provider pricing configuration — price tiers for each storage provider.
///
/// Loaded once per analysis run. The engine assumes a validated config;
/// [`PricingConfig::validate`] is for the loader boundary, which is where
/// malformed input is a reportable error.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price tiers for a single provider plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPricing {
    /// Marketing name of the plan (display only).
    pub plan: CompactString,
    /// Flat monthly fee, charged regardless of usage.
    pub base_usd_per_month: f64,
    /// Storage allowance included in the base fee, in GB.
    pub included_gb: f64,
    /// Rate per GB beyond the included allowance.
    pub overage_usd_per_gb: f64,
    /// Rate per GB on the provider's archive tier.
    pub archive_usd_per_gb: f64,
}

/// The full pricing table, keyed by normalised provider key.
///
/// Providers live in a `BTreeMap` so iteration order is deterministic.
/// That matters: cheapest-provider ties are broken by "first minimum
/// wins", and reproducible runs require a reproducible scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub providers: BTreeMap<CompactString, ProviderPricing>,
    #[serde(default)]
    pub notes: String,
}

/// A pricing-config invariant violation, detected at load time.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("provider {provider}: {field} is negative ({value})")]
    NegativeRate {
        provider: CompactString,
        field: &'static str,
        value: f64,
    },
}

impl PricingConfig {
    /// Look up a provider by its already-normalised key.
    pub fn get(&self, key: &str) -> Option<&ProviderPricing> {
        self.providers.get(key)
    }

    /// Check the config invariants: every rate and allowance must be ≥ 0.
    ///
    /// NaN fails the `>= 0.0` comparison and is rejected along with
    /// genuine negatives.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (key, p) in &self.providers {
            let fields = [
                ("base_usd_per_month", p.base_usd_per_month),
                ("included_gb", p.included_gb),
                ("overage_usd_per_gb", p.overage_usd_per_gb),
                ("archive_usd_per_gb", p.archive_usd_per_gb),
            ];
            for (field, value) in fields {
                if !(value >= 0.0) {
                    return Err(PricingError::NegativeRate {
                        provider: key.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
