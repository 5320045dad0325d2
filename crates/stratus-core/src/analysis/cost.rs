/// Cost engine — monthly cost queries against the pricing configuration.
///
/// Every other analysis module prices files through this one wrapper.
/// Unknown providers are "no pricing data", not errors: they cost $0
/// everywhere and the analysis carries on.
use crate::model::{normalise_provider, FileRecord, PricingConfig};
use compact_str::CompactString;

/// Multiplier applied to current usage when selecting a plan, so the
/// recommendation leaves room to grow instead of being full on day one.
const HEADROOM_MULTIPLIER: f64 = 1.15;

/// Flat API-operation fee charged per migrated file.
const API_FEE_PER_FILE_USD: f64 = 0.001;

/// Egress rate in $/GB when downloading from unlisted providers.
const DEFAULT_EGRESS_USD_PER_GB: f64 = 0.10;

/// A plan recommendation from [`CostEngine::optimal_plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanQuote {
    /// Pricing-config key of the recommended provider.
    pub provider: CompactString,
    /// Monthly cost at the planning size (usage plus headroom).
    pub cost: f64,
    /// Extra GB reserved above current usage.
    pub headroom_gb: f64,
}

/// Stateless cost calculator over a borrowed pricing table.
pub struct CostEngine<'a> {
    pricing: &'a PricingConfig,
}

impl<'a> CostEngine<'a> {
    pub fn new(pricing: &'a PricingConfig) -> Self {
        Self { pricing }
    }

    /// Monthly cost of holding `usage_gb` on `provider`.
    ///
    /// Usage within the included allowance costs the base fee alone;
    /// beyond it, overage is billed per GB. A provider missing from the
    /// pricing table costs 0.
    pub fn provider_cost(&self, provider: &str, usage_gb: f64) -> f64 {
        let key = normalise_provider(provider);
        let Some(pricing) = self.pricing.get(&key) else {
            return 0.0;
        };

        if usage_gb <= pricing.included_gb {
            return pricing.base_usd_per_month;
        }

        let overage = usage_gb - pricing.included_gb;
        pricing.base_usd_per_month + overage * pricing.overage_usd_per_gb
    }

    /// The cheapest configured provider for holding `size_gb`.
    ///
    /// Linear scan in pricing-table order; ties go to the first minimum,
    /// which the `BTreeMap` keeps deterministic. `None` only when the
    /// config has no providers at all.
    pub fn cheapest_provider_for_size(&self, size_gb: f64) -> Option<(CompactString, f64)> {
        let mut cheapest: Option<(CompactString, f64)> = None;
        for key in self.pricing.providers.keys() {
            let cost = self.provider_cost(key, size_gb);
            match &cheapest {
                Some((_, best)) if cost >= *best => {}
                _ => cheapest = Some((key.clone(), cost)),
            }
        }
        cheapest
    }

    /// Pick the cheapest plan for `usage_gb` plus 15% growth headroom.
    pub fn optimal_plan(&self, usage_gb: f64) -> Option<PlanQuote> {
        let planning_gb = usage_gb * HEADROOM_MULTIPLIER;
        let (provider, cost) = self.cheapest_provider_for_size(planning_gb)?;
        Some(PlanQuote {
            provider,
            cost,
            headroom_gb: planning_gb - usage_gb,
        })
    }

    /// Estimated one-off cost of moving `files` to `target_provider`.
    ///
    /// Per file: source-provider egress at $/GB plus a flat per-file API
    /// operation fee. Files already on the target contribute nothing.
    pub fn migration_cost(&self, files: &[FileRecord], target_provider: &str) -> f64 {
        let target = normalise_provider(target_provider);
        let mut total = 0.0;

        for file in files {
            let source = normalise_provider(&file.provider);
            if source == target {
                continue;
            }
            total += file.size_gb() * egress_rate(&source) + API_FEE_PER_FILE_USD;
        }

        total
    }

    /// Monthly savings from moving `files` to their providers' archive tiers.
    ///
    /// Per file: `size_gb × (overage − archive)`, clamped to ≥ 0 so a
    /// provider whose archive tier is not actually cheaper never produces
    /// negative savings. Unpriced providers contribute 0.
    pub fn archive_savings(&self, files: &[FileRecord]) -> f64 {
        let mut total = 0.0;

        for file in files {
            let key = normalise_provider(&file.provider);
            let Some(pricing) = self.pricing.get(&key) else {
                continue;
            };
            let size_gb = file.size_gb();
            let current = size_gb * pricing.overage_usd_per_gb;
            let archived = size_gb * pricing.archive_usd_per_gb;
            total += (current - archived).max(0.0);
        }

        total
    }
}

/// Egress rate in $/GB for downloading out of a normalised provider.
///
/// iCloud is priced highest because its API makes bulk export the most
/// awkward; local disks have no egress at all.
fn egress_rate(provider: &str) -> f64 {
    match provider {
        "google_drive" => 0.12,
        "dropbox" => 0.15,
        "onedrive" => 0.09,
        "icloud" => 0.20,
        "local" => 0.0,
        _ => DEFAULT_EGRESS_USD_PER_GB,
    }
}
