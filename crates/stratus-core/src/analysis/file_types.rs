/// File type categorisation based on MIME types.
///
/// Groups files into broad categories (image, video, audio, document,
/// archive, other) and computes count/size totals per category for the
/// per-provider breakdown.
use crate::model::FileRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Broad MIME categories for the breakdown's type mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Other,
}

impl FileCategory {
    /// All categories, in display order. The breakdown emits every
    /// category even when its totals are zero.
    pub const ALL: [FileCategory; 6] = [
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Document,
        Self::Archive,
        Self::Other,
    ];

    /// Stable lowercase label, also used as the breakdown map key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Other => "other",
        }
    }
}

/// Count and size totals for one category.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub count: u64,
    pub size_gb: f64,
}

/// Categorise a MIME type into a broad category.
///
/// Prefix rules first (`image/`, `video/`, `audio/`), then substring
/// rules: anything mentioning pdf/document/text is a document, anything
/// mentioning zip/tar/archive is an archive. Everything else is `Other`
/// — including the empty string.
pub fn categorise_mime(mime: &str) -> FileCategory {
    let lower = mime.to_ascii_lowercase();
    if lower.starts_with("image/") {
        return FileCategory::Image;
    }
    if lower.starts_with("video/") {
        return FileCategory::Video;
    }
    if lower.starts_with("audio/") {
        return FileCategory::Audio;
    }
    if lower.contains("pdf") || lower.contains("document") || lower.contains("text") {
        return FileCategory::Document;
    }
    if lower.contains("zip") || lower.contains("tar") || lower.contains("archive") {
        return FileCategory::Archive;
    }
    FileCategory::Other
}

/// Per-category count/size totals for a set of files.
///
/// Every category appears in the result, zeroed when empty, keyed by its
/// stable label — a `BTreeMap` so serialised output order never varies.
pub fn category_stats(files: &[FileRecord]) -> BTreeMap<&'static str, CategoryStats> {
    let mut stats: BTreeMap<&'static str, CategoryStats> = FileCategory::ALL
        .iter()
        .map(|c| (c.label(), CategoryStats::default()))
        .collect();

    for file in files {
        let entry = stats.entry(categorise_mime(&file.mime).label()).or_default();
        entry.count += 1;
        entry.size_gb += file.size_gb();
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, mime: &str, size_bytes: u64) -> FileRecord {
        FileRecord {
            id: id.into(),
            provider: "local".into(),
            path: format!("/{id}"),
            size_bytes,
            last_modified: "2024-01-01T00:00:00Z".parse().unwrap(),
            hash: id.into(),
            mime: mime.into(),
            access_tier: None,
            location: None,
        }
    }

    // ── categorise_mime ──────────────────────────────────────────────────

    #[test]
    fn categorise_prefix_matches() {
        assert_eq!(categorise_mime("image/png"), FileCategory::Image);
        assert_eq!(categorise_mime("video/mp4"), FileCategory::Video);
        assert_eq!(categorise_mime("audio/flac"), FileCategory::Audio);
    }

    #[test]
    fn categorise_document_substrings() {
        assert_eq!(categorise_mime("application/pdf"), FileCategory::Document);
        assert_eq!(
            categorise_mime("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            FileCategory::Document
        );
        assert_eq!(categorise_mime("text/plain"), FileCategory::Document);
    }

    #[test]
    fn categorise_archive_substrings() {
        assert_eq!(categorise_mime("application/zip"), FileCategory::Archive);
        assert_eq!(categorise_mime("application/x-tar"), FileCategory::Archive);
    }

    #[test]
    fn categorise_unknown_is_other() {
        assert_eq!(categorise_mime("application/octet-stream"), FileCategory::Other);
        assert_eq!(categorise_mime(""), FileCategory::Other);
    }

    /// MIME matching must be case-insensitive so "Image/PNG" still counts.
    #[test]
    fn categorise_case_insensitive() {
        assert_eq!(categorise_mime("Image/PNG"), FileCategory::Image);
        assert_eq!(categorise_mime("APPLICATION/PDF"), FileCategory::Document);
    }

    // ── category_stats ───────────────────────────────────────────────────

    /// All six categories are present even for an empty file list, so
    /// renderers never have to special-case missing keys.
    #[test]
    fn stats_pre_seed_every_category() {
        let stats = category_stats(&[]);
        assert_eq!(stats.len(), 6);
        assert!(stats.values().all(|s| s.count == 0 && s.size_gb == 0.0));
    }

    #[test]
    fn stats_aggregate_count_and_size() {
        const GB: u64 = 1024 * 1024 * 1024;
        let files = [
            rec("a", "image/png", GB),
            rec("b", "image/jpeg", GB),
            rec("c", "video/mp4", 2 * GB),
        ];
        let stats = category_stats(&files);
        assert_eq!(stats["image"].count, 2);
        assert!((stats["image"].size_gb - 2.0).abs() < 1e-9);
        assert_eq!(stats["video"].count, 1);
        assert_eq!(stats["document"].count, 0);
    }
}
