/// Storage health scoring — one 0–100 figure for the whole inventory.
///
/// A weighted blend of five dimensions. Each dimension is clamped to
/// [0,100] before weighting so one pathological input cannot drag the
/// blend outside the scale. The score has no identity of its own; it is
/// recomputed from current inputs every run.
use crate::analysis::cold::{find_cold_files, ColdDataPolicy};
use crate::analysis::duplicates::DuplicateCluster;
use crate::model::{normalise_provider, FileRecord};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Dimension weights. Must sum to 1.
const WEIGHT_DUPLICATION: f64 = 0.35;
const WEIGHT_COLD_BULK: f64 = 0.25;
const WEIGHT_COST_EFFICIENCY: f64 = 0.25;
const WEIGHT_FRAGMENTATION: f64 = 0.10;
const WEIGHT_RISK_POSTURE: f64 = 0.05;

/// Fragmentation is graded against this many providers.
const MAX_PROVIDERS: f64 = 5.0;

/// Compute the health score.
///
/// `realistic_savings` is the capped/floored aggregate shown to users
/// (see [`crate::analysis::savings`]), not the raw action sum — the cost
/// dimension grades against what a user could plausibly recover. An
/// empty inventory scores a vacuous 100.
pub fn health_score(
    files: &[FileRecord],
    clusters: &[DuplicateCluster],
    current_monthly_cost: f64,
    realistic_savings: f64,
    policy: ColdDataPolicy,
    now: DateTime<Utc>,
) -> u8 {
    if files.is_empty() {
        return 100;
    }

    let duplication = duplication_score(files, clusters);
    let cold_bulk = cold_bulk_score(files, policy, now);
    let cost_efficiency = cost_efficiency_score(current_monthly_cost, realistic_savings);
    let fragmentation = fragmentation_score(files);
    let risk_posture = if clusters.is_empty() { 80.0 } else { 100.0 };

    let blended = duplication * WEIGHT_DUPLICATION
        + cold_bulk * WEIGHT_COLD_BULK
        + cost_efficiency * WEIGHT_COST_EFFICIENCY
        + fragmentation * WEIGHT_FRAGMENTATION
        + risk_posture * WEIGHT_RISK_POSTURE;

    blended.round().clamp(0.0, 100.0) as u8
}

/// Share of files participating in any duplicate cluster, inverted.
fn duplication_score(files: &[FileRecord], clusters: &[DuplicateCluster]) -> f64 {
    let duplicate_count: usize = clusters.iter().map(|c| c.files.len()).sum();
    let ratio = duplicate_count as f64 / files.len() as f64;
    (100.0 * (1.0 - ratio)).clamp(0.0, 100.0)
}

/// Share of bytes sitting in cold files, inverted.
fn cold_bulk_score(files: &[FileRecord], policy: ColdDataPolicy, now: DateTime<Utc>) -> f64 {
    let total_bytes: u64 = files.iter().map(|f| f.size_bytes).sum();
    if total_bytes == 0 {
        return 100.0;
    }
    let cold_bytes: u64 = find_cold_files(files, policy, now)
        .iter()
        .map(|f| f.size_bytes)
        .sum();
    (100.0 * (1.0 - cold_bytes as f64 / total_bytes as f64)).clamp(0.0, 100.0)
}

/// Recoverable share of the current bill, inverted. A free inventory has
/// nothing to waste and grades perfect.
fn cost_efficiency_score(current_monthly_cost: f64, realistic_savings: f64) -> f64 {
    if current_monthly_cost <= 0.0 {
        return 100.0;
    }
    (100.0 * (1.0 - realistic_savings / current_monthly_cost)).clamp(0.0, 100.0)
}

/// Provider sprawl, graded linearly from one provider (perfect) to five
/// or more (zero).
fn fragmentation_score(files: &[FileRecord]) -> f64 {
    let providers: HashSet<_> = files.iter().map(|f| normalise_provider(&f.provider)).collect();
    let count = providers.len() as f64;
    (100.0 * (1.0 - (count - 1.0) / (MAX_PROVIDERS - 1.0))).clamp(0.0, 100.0)
}
