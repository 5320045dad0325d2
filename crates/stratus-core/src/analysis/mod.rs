/// Analysis modules — the derived views over an inventory snapshot.

pub mod actions;
pub mod breakdown;
pub mod cold;
pub mod consolidation;
pub mod cost;
pub mod duplicates;
pub mod file_types;
pub mod health;
pub mod savings;

pub use actions::{generate_actions, ActionKind, Friction, OptimizationAction};
pub use breakdown::{storage_breakdown, StorageBreakdown};
pub use cold::{find_cold_files, ColdDataPolicy};
pub use consolidation::plan_consolidation;
pub use cost::{CostEngine, PlanQuote};
pub use duplicates::{find_duplicate_clusters, DuplicateCluster};
pub use file_types::{categorise_mime, category_stats, CategoryStats, FileCategory};
pub use health::health_score;
pub use savings::potential_savings;
