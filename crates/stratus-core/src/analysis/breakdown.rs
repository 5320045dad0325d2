/// Per-provider storage breakdown — totals for display.
///
/// One entry per distinct provider label in the inventory, with a full
/// MIME-category mix. Nothing is dropped: the per-provider sizes sum to
/// the snapshot total byte-for-byte.
use crate::analysis::cost::CostEngine;
use crate::analysis::file_types::{category_stats, CategoryStats};
use crate::model::FileRecord;
use compact_str::CompactString;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Totals for one provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageBreakdown {
    /// Provider label as it appears in the inventory.
    pub provider: CompactString,
    pub total_files: u64,
    pub total_size_gb: f64,
    /// Monthly cost of this provider's total usage.
    pub estimated_monthly_cost: f64,
    /// Category label → count/size totals (all six categories present).
    pub file_types: BTreeMap<&'static str, CategoryStats>,
}

/// Group files by provider label and total them up.
///
/// Entries are sorted by estimated monthly cost, highest first (stable,
/// with first-seen grouping order underneath, so output is deterministic).
pub fn storage_breakdown(files: &[FileRecord], cost: &CostEngine) -> Vec<StorageBreakdown> {
    let mut order: Vec<CompactString> = Vec::new();
    let mut groups: HashMap<CompactString, Vec<FileRecord>> = HashMap::new();

    for file in files {
        groups
            .entry(file.provider.clone())
            .or_insert_with(|| {
                order.push(file.provider.clone());
                Vec::new()
            })
            .push(file.clone());
    }

    let mut breakdown: Vec<StorageBreakdown> = order
        .into_iter()
        .map(|provider| {
            let members = &groups[&provider];
            let total_size_gb: f64 = members.iter().map(FileRecord::size_gb).sum();
            StorageBreakdown {
                estimated_monthly_cost: cost.provider_cost(&provider, total_size_gb),
                total_files: members.len() as u64,
                total_size_gb,
                file_types: category_stats(members),
                provider,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.estimated_monthly_cost
            .partial_cmp(&a.estimated_monthly_cost)
            .unwrap_or(Ordering::Equal)
    });
    breakdown
}
