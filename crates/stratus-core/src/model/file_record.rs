/// A single file in the cross-provider inventory snapshot.
///
/// Records are created once per analysis run from an external snapshot feed
/// and never mutated — the engine only reads them. Derived entities
/// (clusters, actions, breakdowns) reference records by value or id,
/// never by ownership.
use crate::model::size::BYTES_PER_GB;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One snapshot entry. Field names follow the snapshot wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique id within the snapshot.
    pub id: CompactString,

    /// Provider label as reported by the inventory (e.g. `drive`, `dropbox`).
    /// Pricing lookups go through [`normalise_provider`] first.
    pub provider: CompactString,

    /// Full storage path within the provider.
    pub path: String,

    /// Logical file size in bytes.
    pub size_bytes: u64,

    /// Last-modified timestamp, used for cold-data analysis.
    pub last_modified: DateTime<Utc>,

    /// Opaque content fingerprint — equal hashes mean equal content.
    pub hash: CompactString,

    /// MIME type, used for category breakdowns.
    pub mime: CompactString,

    /// Provider-specific access tier, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<CompactString>,

    /// Datacentre region or device location, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<CompactString>,
}

impl FileRecord {
    /// File size in binary gigabytes (1024³ bytes).
    pub fn size_gb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_GB
    }
}

/// Map an inventory provider label onto its pricing-config key.
///
/// The inventory feed is looser about naming than the pricing config
/// (`drive` vs `google_drive`); this is the single place that mapping
/// lives. Unknown labels pass through lowercased so that an unpriced
/// provider still groups consistently — it simply costs $0 everywhere.
pub fn normalise_provider(provider: &str) -> CompactString {
    let lower = provider.to_ascii_lowercase();
    match lower.as_str() {
        "drive" | "google_drive" => CompactString::const_new("google_drive"),
        "dropbox" => CompactString::const_new("dropbox"),
        "onedrive" => CompactString::const_new("onedrive"),
        "icloud" => CompactString::const_new("icloud"),
        "local" => CompactString::const_new("local"),
        _ => CompactString::new(lower),
    }
}
