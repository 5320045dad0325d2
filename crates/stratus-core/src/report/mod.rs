/// One-shot analysis pipeline — snapshot in, full report out.
///
/// Everything is recomputed from scratch on every call; there is no
/// incremental path, so derived values always describe one consistent
/// snapshot. The function is pure: same inputs, same report, and safe to
/// call from any number of threads as long as each call owns its inputs.
use crate::analysis::{
    find_duplicate_clusters, generate_actions, health_score, potential_savings,
    storage_breakdown, ColdDataPolicy, CostEngine, DuplicateCluster, OptimizationAction,
    StorageBreakdown,
};
use crate::model::{FileRecord, PricingConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Per-run analysis settings, owned by the caller.
///
/// The reference clock lives here so cold-data cutoffs are explicit and
/// reproducible — the engine never consults the wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub now: DateTime<Utc>,
    pub cold: ColdDataPolicy,
}

impl AnalysisOptions {
    /// Default thresholds anchored at the given clock.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            cold: ColdDataPolicy::default(),
        }
    }
}

/// Every derived view over one snapshot, plus aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Duplicate clusters, sorted by potential savings descending.
    pub clusters: Vec<DuplicateCluster>,
    /// Recommended actions, sorted by estimated savings descending.
    pub actions: Vec<OptimizationAction>,
    /// Per-provider totals, sorted by monthly cost descending.
    pub breakdown: Vec<StorageBreakdown>,
    pub total_files: u64,
    pub total_size_gb: f64,
    /// Sum of the per-provider monthly costs.
    pub current_monthly_cost: f64,
    /// Capped/floored realistic savings figure for display.
    pub potential_savings_usd: f64,
    /// Aggregate health score, 0–100.
    pub health_score: u8,
}

/// Run the full pipeline over one snapshot.
pub fn analyze(
    files: &[FileRecord],
    pricing: &PricingConfig,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let cost = CostEngine::new(pricing);

    let clusters = find_duplicate_clusters(files, &cost);
    debug!(clusters = clusters.len(), "duplicate detection done");

    let actions = generate_actions(files, &clusters, &cost, options.cold, options.now);
    debug!(actions = actions.len(), "action ranking done");

    let breakdown = storage_breakdown(files, &cost);
    let current_monthly_cost: f64 = breakdown.iter().map(|b| b.estimated_monthly_cost).sum();

    let potential_savings_usd = potential_savings(&actions, current_monthly_cost);
    let health = health_score(
        files,
        &clusters,
        current_monthly_cost,
        potential_savings_usd,
        options.cold,
        options.now,
    );

    let report = AnalysisReport {
        total_files: files.len() as u64,
        total_size_gb: files.iter().map(FileRecord::size_gb).sum(),
        current_monthly_cost,
        potential_savings_usd,
        health_score: health,
        clusters,
        actions,
        breakdown,
    };

    info!(
        files = report.total_files,
        providers = report.breakdown.len(),
        clusters = report.clusters.len(),
        actions = report.actions.len(),
        health = report.health_score,
        "analysis complete"
    );
    report
}
