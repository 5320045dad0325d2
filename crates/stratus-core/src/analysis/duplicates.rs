/// Duplicate file detection — content-fingerprint clustering across providers.
///
/// Files sharing a hash are assumed byte-identical. Each cluster keeps
/// exactly one copy (the "keeper") and prices every other copy as
/// removable spend.
use crate::analysis::cost::CostEngine;
use crate::model::{normalise_provider, FileRecord};
use compact_str::CompactString;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// A group of files with identical content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateCluster {
    /// The shared content fingerprint.
    pub hash: CompactString,
    /// All copies, in snapshot order. Always ≥ 2 entries.
    pub files: Vec<FileRecord>,
    /// Size of a single copy in bytes.
    pub total_size_bytes: u64,
    /// Number of distinct providers holding a copy.
    pub provider_count: usize,
    /// The copy worth keeping; always one of `files`.
    pub recommended_keeper: FileRecord,
    /// Monthly cost of every redundant copy. This is the full carrying
    /// cost of each extra copy, not a marginal differential.
    pub potential_savings_usd: f64,
}

/// Cluster files by content fingerprint and price the redundancy.
///
/// Groups preserve first-seen input order before sorting, and the sort is
/// stable, so identical inputs always produce identical output. Clusters
/// are returned sorted by potential savings, highest first.
pub fn find_duplicate_clusters(files: &[FileRecord], cost: &CostEngine) -> Vec<DuplicateCluster> {
    let mut order: Vec<CompactString> = Vec::new();
    let mut groups: HashMap<CompactString, Vec<FileRecord>> = HashMap::new();

    for file in files {
        groups
            .entry(file.hash.clone())
            .or_insert_with(|| {
                order.push(file.hash.clone());
                Vec::new()
            })
            .push(file.clone());
    }

    let mut clusters: Vec<DuplicateCluster> = Vec::new();

    for hash in order {
        let members = &groups[&hash];
        if members.len() < 2 {
            continue;
        }

        // Copies are identical, so one member's size is the cluster size.
        let total_size_bytes = members[0].size_bytes;
        let provider_count = members
            .iter()
            .map(|f| f.provider.as_str())
            .collect::<HashSet<_>>()
            .len();

        let size_gb = total_size_bytes as f64 / crate::model::size::BYTES_PER_GB;
        let cheapest = cost.cheapest_provider_for_size(size_gb);
        let keeper = select_keeper(members, cheapest.as_ref().map(|(p, _)| p.as_str()));

        let potential_savings_usd = members
            .iter()
            .filter(|f| f.id != keeper.id)
            .map(|f| cost.provider_cost(&f.provider, f.size_gb()))
            .sum();

        clusters.push(DuplicateCluster {
            hash,
            files: members.clone(),
            total_size_bytes,
            provider_count,
            recommended_keeper: keeper,
            potential_savings_usd,
        });
    }

    clusters.sort_by(|a, b| {
        b.potential_savings_usd
            .partial_cmp(&a.potential_savings_usd)
            .unwrap_or(Ordering::Equal)
    });
    clusters
}

/// Pick which copy to keep: the first member (input order) already on the
/// cheapest provider, otherwise the most recently modified member.
fn select_keeper(members: &[FileRecord], cheapest_provider: Option<&str>) -> FileRecord {
    let mut keeper = &members[0];
    for file in members {
        if let Some(cheapest) = cheapest_provider {
            if normalise_provider(&file.provider) == cheapest {
                return file.clone();
            }
        }
        if file.last_modified > keeper.last_modified {
            keeper = file;
        }
    }
    keeper.clone()
}
