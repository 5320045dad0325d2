/// Snapshot and pricing-config loading.
///
/// Shape validation lives here, at the boundary — the engine assumes
/// well-typed input. The snapshot feed comes either as a bare JSON
/// array or wrapped in a `{ "files": [...] }` object; both are accepted.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stratus_core::model::{FileRecord, PricingConfig, PricingError};

/// A loading failure: unreadable file, malformed JSON, or a pricing
/// config that violates its invariants.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pricing config: {0}")]
    Pricing(#[from] PricingError),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Wrapped { files: Vec<FileRecord> },
    Bare(Vec<FileRecord>),
}

/// Load the file inventory snapshot from JSON.
pub fn load_snapshot(path: &Path) -> Result<Vec<FileRecord>, LoadError> {
    let raw = read(path)?;
    let snapshot: SnapshotFile = parse(path, &raw)?;
    Ok(match snapshot {
        SnapshotFile::Wrapped { files } => files,
        SnapshotFile::Bare(files) => files,
    })
}

/// Load and validate the pricing configuration from JSON.
pub fn load_pricing(path: &Path) -> Result<PricingConfig, LoadError> {
    let raw = read(path)?;
    let config: PricingConfig = parse(path, &raw)?;
    config.validate()?;
    Ok(config)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<'a, T: Deserialize<'a>>(path: &Path, raw: &'a str) -> Result<T, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
