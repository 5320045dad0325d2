/// Realistic potential-savings aggregation.
///
/// The raw action list sums optimistic per-action figures. The number we
/// surface applies extra realism: a bulk-move overhead over the bytes
/// that would actually travel, a cap relative to the current bill (no
/// bill shrinks 90% in practice), and a floor that hides noise-level
/// amounts.
use crate::analysis::actions::{ActionKind, OptimizationAction};
use std::collections::HashSet;

/// Flat overhead per GB moved by cold-storage and consolidation actions.
const MIGRATION_OVERHEAD_USD_PER_GB: f64 = 0.01;

/// Displayed savings never exceed this share of the current bill.
const SAVINGS_CAP_RATIO: f64 = 0.40;

/// Anything below this displays as zero.
const MIN_DISPLAY_SAVINGS_USD: f64 = 1.00;

/// Capped, floored monthly savings across the whole action list.
///
/// The overhead term covers the union of files affected by cold-storage
/// and consolidation actions — a file in both travels once. Dedupe files
/// are excluded: deleting a copy moves nothing.
pub fn potential_savings(actions: &[OptimizationAction], current_monthly_cost: f64) -> f64 {
    let mut total: f64 = 0.0;
    let mut moved_gb: f64 = 0.0;
    let mut moved_ids: HashSet<&str> = HashSet::new();

    for action in actions {
        total += action.estimated_savings_usd;
        if action.kind == ActionKind::Dedupe {
            continue;
        }
        for file in &action.affected_files {
            if moved_ids.insert(file.id.as_str()) {
                moved_gb += file.size_gb();
            }
        }
    }

    let overhead = moved_gb * MIGRATION_OVERHEAD_USD_PER_GB;
    let capped = (total - overhead).min(current_monthly_cost * SAVINGS_CAP_RATIO);

    if capped < MIN_DISPLAY_SAVINGS_USD {
        0.0
    } else {
        capped
    }
}
