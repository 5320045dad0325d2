/// Cold data detection — large files nobody has touched in months.
///
/// Candidates for a provider's cheaper archive tier. Both thresholds and
/// the reference clock are injected so the detector is testable and runs
/// are reproducible.
use crate::model::FileRecord;
use chrono::{DateTime, Duration, Utc};

/// Thresholds for what counts as "cold".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdDataPolicy {
    /// Files untouched for longer than this are stale.
    pub max_age_days: i64,
    /// Files smaller than this are not worth archiving.
    pub min_size_gb: f64,
}

impl Default for ColdDataPolicy {
    /// Six months untouched and at least 1 GB.
    fn default() -> Self {
        Self {
            max_age_days: 180,
            min_size_gb: 1.0,
        }
    }
}

/// Files older than the policy cutoff AND at least the policy size floor.
///
/// Output preserves snapshot order. `now` is the caller's clock — the
/// engine never reads the wall clock itself.
pub fn find_cold_files(
    files: &[FileRecord],
    policy: ColdDataPolicy,
    now: DateTime<Utc>,
) -> Vec<FileRecord> {
    let cutoff = now - Duration::days(policy.max_age_days);
    files
        .iter()
        .filter(|f| f.last_modified < cutoff && f.size_gb() >= policy.min_size_gb)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GB: u64 = 1024 * 1024 * 1024;

    fn rec(id: &str, size_bytes: u64, modified: &str) -> FileRecord {
        FileRecord {
            id: id.into(),
            provider: "dropbox".into(),
            path: format!("/{id}"),
            size_bytes,
            last_modified: modified.parse().unwrap(),
            hash: id.into(),
            mime: "video/mp4".into(),
            access_tier: None,
            location: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-09-01T00:00:00Z".parse().unwrap()
    }

    /// A large file a year past its modification date is cold.
    #[test]
    fn old_large_file_is_cold() {
        let files = [rec("a", 2 * GB, "2023-09-01T00:00:00Z")];
        let cold = find_cold_files(&files, ColdDataPolicy::default(), now());
        assert_eq!(cold.len(), 1);
        assert_eq!(cold[0].id, "a");
    }

    /// Stale but small files are excluded — archiving them saves nothing
    /// worth the churn.
    #[test]
    fn small_file_is_not_cold() {
        let files = [rec("a", GB / 2, "2020-01-01T00:00:00Z")];
        assert!(find_cold_files(&files, ColdDataPolicy::default(), now()).is_empty());
    }

    /// Large but recently touched files are excluded.
    #[test]
    fn recent_file_is_not_cold() {
        let files = [rec("a", 5 * GB, "2024-08-01T00:00:00Z")];
        assert!(find_cold_files(&files, ColdDataPolicy::default(), now()).is_empty());
    }

    /// A file modified exactly at the cutoff is not older than it.
    #[test]
    fn file_at_exact_cutoff_is_not_cold() {
        let files = [rec("a", 2 * GB, "2024-03-05T00:00:00Z")];
        // 180 days before 2024-09-01 is 2024-03-05.
        assert!(find_cold_files(&files, ColdDataPolicy::default(), now()).is_empty());
    }

    /// Thresholds are policy, not constants: a tighter policy flags files
    /// the default policy would pass over.
    #[test]
    fn custom_policy_overrides_defaults() {
        let files = [rec("a", 100 * 1024 * 1024, "2024-07-01T00:00:00Z")];
        let tight = ColdDataPolicy {
            max_age_days: 30,
            min_size_gb: 0.05,
        };
        assert_eq!(find_cold_files(&files, tight, now()).len(), 1);
        assert!(find_cold_files(&files, ColdDataPolicy::default(), now()).is_empty());
    }

    /// Snapshot order is preserved so downstream output is deterministic.
    #[test]
    fn output_preserves_input_order() {
        let files = [
            rec("b", 2 * GB, "2023-01-01T00:00:00Z"),
            rec("a", 3 * GB, "2023-02-01T00:00:00Z"),
        ];
        let cold = find_cold_files(&files, ColdDataPolicy::default(), now());
        let ids: Vec<_> = cold.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
