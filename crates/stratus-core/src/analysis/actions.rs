/// Optimization action ranking — dedupe, cold storage and consolidation
/// proposals, ordered by what they save.
///
/// The ranker threads an explicit claimed-file set through the three
/// detectors so the same file never funds two actions at once: files
/// removed by a dedupe proposal are off the table for cold storage and
/// consolidation.
use crate::analysis::cold::{find_cold_files, ColdDataPolicy};
use crate::analysis::consolidation::plan_consolidation;
use crate::analysis::cost::CostEngine;
use crate::analysis::duplicates::DuplicateCluster;
use crate::model::FileRecord;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// How many duplicate clusters are worth turning into actions per run.
const MAX_DEDUPE_CLUSTERS: usize = 10;

/// Net-savings floors below which an action is suppressed entirely.
const MIN_DEDUPE_SAVINGS_USD: f64 = 0.50;
const MIN_COLD_SAVINGS_USD: f64 = 1.00;

/// Archive moves are cheaper than live migrations — bulk transfer into a
/// colder tier, usually within the same provider family.
const ARCHIVE_MIGRATION_FACTOR: f64 = 0.5;

/// The closed set of action types. Icon/colour/copy selection belongs to
/// renderers, which switch on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Dedupe,
    ColdStorage,
    Consolidation,
}

impl ActionKind {
    /// Stable wire-format tag, matching the serialised form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dedupe => "dedupe",
            Self::ColdStorage => "cold_storage",
            Self::Consolidation => "consolidation",
        }
    }
}

/// Qualitative effort/risk label, derived from affected-item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Friction {
    Low,
    Medium,
    High,
}

impl Friction {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single recommended optimization, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationAction {
    pub id: CompactString,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub title: String,
    pub description: String,
    /// Monthly savings net of modelled migration cost. Always above the
    /// kind-specific minimum — lower-value proposals are suppressed.
    pub estimated_savings_usd: f64,
    pub friction: Friction,
    /// The files this action would touch (read-only copies).
    pub affected_files: Vec<FileRecord>,
    /// Provider labels the action moves data away from.
    pub provider_changes: Vec<CompactString>,
}

/// Build the ranked action list from pre-computed duplicate clusters.
///
/// Order of evaluation matters: dedupe claims its cluster members first,
/// then cold storage and consolidation only see what is left. The final
/// list is sorted by estimated savings, highest first (stable).
pub fn generate_actions(
    files: &[FileRecord],
    clusters: &[DuplicateCluster],
    cost: &CostEngine,
    policy: ColdDataPolicy,
    now: DateTime<Utc>,
) -> Vec<OptimizationAction> {
    let mut actions: Vec<OptimizationAction> = Vec::new();
    let mut claimed: HashSet<CompactString> = HashSet::new();

    dedupe_actions(clusters, cost, &mut actions, &mut claimed);

    let cold: Vec<FileRecord> = find_cold_files(files, policy, now)
        .into_iter()
        .filter(|f| !claimed.contains(&f.id))
        .collect();
    if let Some(action) = cold_storage_action(&cold, cost) {
        actions.push(action);
    }

    let unclaimed: Vec<FileRecord> = files
        .iter()
        .filter(|f| !claimed.contains(&f.id))
        .cloned()
        .collect();
    if let Some(action) = plan_consolidation(&unclaimed, cost) {
        actions.push(action);
    }

    actions.sort_by(|a, b| {
        b.estimated_savings_usd
            .partial_cmp(&a.estimated_savings_usd)
            .unwrap_or(Ordering::Equal)
    });
    actions
}

/// One action per worthwhile cluster, capped at the top ten by savings.
///
/// Every member of an emitted cluster (keeper included) is claimed so the
/// cold-storage pass cannot price the same bytes twice.
fn dedupe_actions(
    clusters: &[DuplicateCluster],
    cost: &CostEngine,
    actions: &mut Vec<OptimizationAction>,
    claimed: &mut HashSet<CompactString>,
) {
    for cluster in clusters.iter().take(MAX_DEDUPE_CLUSTERS) {
        let removals: Vec<FileRecord> = cluster
            .files
            .iter()
            .filter(|f| f.id != cluster.recommended_keeper.id)
            .cloned()
            .collect();

        let migration = cost.migration_cost(&removals, &cluster.recommended_keeper.provider);
        let net_savings = (cluster.potential_savings_usd - migration).max(0.0);
        if net_savings <= MIN_DEDUPE_SAVINGS_USD {
            continue;
        }

        let friction = match removals.len() {
            0..=3 => Friction::Low,
            4..=8 => Friction::Medium,
            _ => Friction::High,
        };

        actions.push(OptimizationAction {
            id: CompactString::new(format!("dedupe-{}", cluster.hash)),
            kind: ActionKind::Dedupe,
            title: format!("Remove {} duplicate copies", removals.len()),
            description: format!(
                "Keep file on {}, remove copies from other providers",
                cluster.recommended_keeper.provider
            ),
            estimated_savings_usd: net_savings,
            friction,
            provider_changes: distinct_providers(&removals),
            affected_files: removals,
        });

        for file in &cluster.files {
            claimed.insert(file.id.clone());
        }
    }
}

/// One bulk action covering every unclaimed cold file, if it pays.
fn cold_storage_action(cold: &[FileRecord], cost: &CostEngine) -> Option<OptimizationAction> {
    let first = cold.first()?;
    let raw_savings = cost.archive_savings(cold);
    let migration = cost.migration_cost(cold, &first.provider);
    let net_savings = (raw_savings - migration * ARCHIVE_MIGRATION_FACTOR).max(0.0);
    if net_savings <= MIN_COLD_SAVINGS_USD {
        return None;
    }

    let friction = match cold.len() {
        0..=20 => Friction::Low,
        21..=100 => Friction::Medium,
        _ => Friction::High,
    };

    Some(OptimizationAction {
        id: "cold-storage".into(),
        kind: ActionKind::ColdStorage,
        title: format!("Archive {} old files", cold.len()),
        description: "Move large files older than 6 months to cheaper archive storage".into(),
        estimated_savings_usd: net_savings,
        friction,
        provider_changes: distinct_providers(cold),
        affected_files: cold.to_vec(),
    })
}

/// Distinct provider labels in first-seen order.
fn distinct_providers(files: &[FileRecord]) -> Vec<CompactString> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut providers = Vec::new();
    for file in files {
        if seen.insert(file.provider.as_str()) {
            providers.push(file.provider.clone());
        }
    }
    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::duplicates::find_duplicate_clusters;
    use crate::model::{PricingConfig, ProviderPricing};

    const GB: u64 = 1024 * 1024 * 1024;

    fn pricing_fixture() -> PricingConfig {
        let mut config = PricingConfig::default();
        let entries: [(&str, f64, f64, f64, f64); 5] = [
            ("google_drive", 1.99, 15.0, 0.02, 0.004),
            ("dropbox", 11.99, 2048.0, 0.06, 0.01),
            ("icloud", 2.99, 200.0, 0.05, 0.007),
            ("onedrive", 6.99, 1024.0, 0.03, 0.005),
            ("local", 0.0, 1000.0, 0.0, 0.0),
        ];
        for (key, base, included, overage, archive) in entries {
            config.providers.insert(
                key.into(),
                ProviderPricing {
                    plan: "Test".into(),
                    base_usd_per_month: base,
                    included_gb: included,
                    overage_usd_per_gb: overage,
                    archive_usd_per_gb: archive,
                },
            );
        }
        config
    }

    fn rec(id: &str, provider: &str, hash: &str, size_bytes: u64, modified: &str) -> FileRecord {
        FileRecord {
            id: id.into(),
            provider: provider.into(),
            path: format!("/{id}"),
            size_bytes,
            last_modified: modified.parse().unwrap(),
            hash: hash.into(),
            mime: "application/octet-stream".into(),
            access_tier: None,
            location: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-09-01T00:00:00Z".parse().unwrap()
    }

    fn run(files: &[FileRecord], config: &PricingConfig) -> Vec<OptimizationAction> {
        let engine = CostEngine::new(config);
        let clusters = find_duplicate_clusters(files, &engine);
        generate_actions(files, &clusters, &engine, ColdDataPolicy::default(), now())
    }

    /// A cluster with redundant copies on paid providers becomes a dedupe
    /// action whose affected files are the removals, not the keeper.
    #[test]
    fn dedupe_action_covers_removals_only() {
        let config = pricing_fixture();
        let files = [
            rec("keep", "local", "h1", GB, "2024-08-01T00:00:00Z"),
            rec("x1", "dropbox", "h1", GB, "2024-07-01T00:00:00Z"),
            rec("x2", "icloud", "h1", GB, "2024-06-01T00:00:00Z"),
        ];

        let actions = run(&files, &config);
        let dedupe = actions
            .iter()
            .find(|a| a.kind == ActionKind::Dedupe)
            .expect("dedupe action expected");
        assert_eq!(dedupe.id, "dedupe-h1");
        assert_eq!(dedupe.friction, Friction::Low);
        let ids: Vec<_> = dedupe.affected_files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["x1", "x2"]);
        assert_eq!(dedupe.provider_changes, ["dropbox", "icloud"]);
        assert!(dedupe.estimated_savings_usd > MIN_DEDUPE_SAVINGS_USD);
    }

    /// Files claimed by a dedupe action never reappear in a cold-storage
    /// action, even when they meet the cold thresholds.
    #[test]
    fn claimed_files_are_excluded_from_cold_storage() {
        let config = pricing_fixture();
        // Both copies are big and stale; dedupe claims the whole cluster.
        let files = [
            rec("keep", "local", "h1", 50 * GB, "2023-01-01T00:00:00Z"),
            rec("dupe", "dropbox", "h1", 50 * GB, "2023-01-01T00:00:00Z"),
        ];

        let actions = run(&files, &config);
        let dedupe_ids: HashSet<&str> = actions
            .iter()
            .filter(|a| a.kind == ActionKind::Dedupe)
            .flat_map(|a| a.affected_files.iter().map(|f| f.id.as_str()))
            .collect();
        let cold_ids: HashSet<&str> = actions
            .iter()
            .filter(|a| a.kind == ActionKind::ColdStorage)
            .flat_map(|a| a.affected_files.iter().map(|f| f.id.as_str()))
            .collect();
        assert!(dedupe_ids.is_disjoint(&cold_ids));
        // The keeper was claimed too, so no cold action remains at all.
        assert!(cold_ids.is_empty());
    }

    /// Stale bulk on a provider with a cheaper archive tier produces a
    /// cold-storage action with net savings above the $1 floor.
    #[test]
    fn cold_files_become_archive_action() {
        let config = pricing_fixture();
        let files = [
            rec("a", "dropbox", "h1", 100 * GB, "2023-01-01T00:00:00Z"),
            rec("b", "dropbox", "h2", 80 * GB, "2023-02-01T00:00:00Z"),
        ];

        let actions = run(&files, &config);
        assert_eq!(actions.len(), 1);
        let cold = &actions[0];
        assert_eq!(cold.kind, ActionKind::ColdStorage);
        assert_eq!(cold.id, "cold-storage");
        assert_eq!(cold.title, "Archive 2 old files");
        assert_eq!(cold.friction, Friction::Low);
        // Same-provider archive move: no egress in the migration model.
        let expected = 180.0 * (0.06 - 0.01);
        assert!((cold.estimated_savings_usd - expected).abs() < 1e-9);
    }

    /// A zero-rate provider yields zero archive savings — the action is
    /// suppressed rather than emitted at $0.
    #[test]
    fn free_tier_cold_files_are_suppressed() {
        let config = pricing_fixture();
        let files = [rec("a", "local", "h1", 2 * GB, "2020-01-01T00:00:00Z")];
        let actions = run(&files, &config);
        assert!(actions.is_empty());
    }

    /// The final list is ordered by savings, biggest win first.
    #[test]
    fn actions_sorted_by_savings_descending() {
        let config = pricing_fixture();
        let files = [
            // Dedupe: redundant copy on dropbox (~$11.99 gross).
            rec("k", "local", "h1", GB, "2024-08-01T00:00:00Z"),
            rec("d", "dropbox", "h1", GB, "2024-08-01T00:00:00Z"),
            // Cold bulk on icloud, well past the cutoff.
            rec("c1", "icloud", "h2", 300 * GB, "2023-01-01T00:00:00Z"),
        ];

        let actions = run(&files, &config);
        assert!(actions.len() >= 2);
        for pair in actions.windows(2) {
            assert!(pair[0].estimated_savings_usd >= pair[1].estimated_savings_usd);
        }
    }

    #[test]
    fn empty_inventory_yields_no_actions() {
        let config = pricing_fixture();
        assert!(run(&[], &config).is_empty());
    }
}
