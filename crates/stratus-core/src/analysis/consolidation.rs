/// Provider consolidation planning — is one big plan cheaper than many
/// small ones?
///
/// Only worth proposing once the inventory is genuinely fragmented
/// (three or more providers); below that, the migration churn always
/// outweighs the plan arithmetic.
use crate::analysis::actions::{ActionKind, Friction, OptimizationAction};
use crate::analysis::cost::CostEngine;
use crate::model::{normalise_provider, FileRecord};
use compact_str::CompactString;
use std::collections::HashMap;

/// Minimum distinct providers before consolidation is considered.
const MIN_PROVIDERS: usize = 3;

/// Net savings must clear this before an action is emitted.
const MIN_NET_SAVINGS_USD: f64 = 2.00;

/// Evaluate moving every file to a single optimal provider.
///
/// Compares the summed per-provider cost of the current spread against
/// the cheapest single plan at total usage (with growth headroom), net of
/// the migration cost of actually moving everything. Emits nothing when
/// the inventory spans fewer than three providers or the net savings are
/// too small to act on.
pub fn plan_consolidation(files: &[FileRecord], cost: &CostEngine) -> Option<OptimizationAction> {
    if files.is_empty() {
        return None;
    }

    // Usage per normalised provider, first-seen order kept for the
    // provider-change list.
    let mut order: Vec<CompactString> = Vec::new();
    let mut usage_gb: HashMap<CompactString, f64> = HashMap::new();
    for file in files {
        let key = normalise_provider(&file.provider);
        *usage_gb.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            0.0
        }) += file.size_gb();
    }

    if usage_gb.len() < MIN_PROVIDERS {
        return None;
    }

    let total_gb: f64 = usage_gb.values().sum();
    let optimal = cost.optimal_plan(total_gb)?;

    let current_cost: f64 = order
        .iter()
        .map(|key| cost.provider_cost(key, usage_gb[key]))
        .sum();

    let migration = cost.migration_cost(files, &optimal.provider);
    let net_savings = (current_cost - optimal.cost - migration).max(0.0);
    if net_savings <= MIN_NET_SAVINGS_USD {
        return None;
    }

    let friction = if usage_gb.len() <= MIN_PROVIDERS {
        Friction::Medium
    } else {
        Friction::High
    };

    Some(OptimizationAction {
        id: "consolidate-providers".into(),
        kind: ActionKind::Consolidation,
        title: format!("Consolidate to {}", optimal.provider),
        description: format!(
            "Move all files to {} for optimal pricing (includes {:.0}GB growth headroom)",
            optimal.provider, optimal.headroom_gb
        ),
        estimated_savings_usd: net_savings,
        friction,
        affected_files: files.to_vec(),
        provider_changes: order.into_iter().filter(|p| *p != optimal.provider).collect(),
    })
}
