//! Plugin catalog manifest model
//!
//! The manifest is a JSON array of plugin descriptors; release tooling only
//! ever appends to the first descriptor's `versions` list. Everything else in
//! the file rides through a rewrite untouched.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Changelog pointer stamped into every appended record.
pub const CHANGELOG: &str =
    "See for more details: https://github.com/infinityofspace/jellyfin-alexa-plugin/releases";

/// Minimum host application ABI the packaged skill supports.
pub const TARGET_ABI: &str = "10.8.0.0";

/// Timestamp layout used by the catalog, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while loading or rewriting the manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to access manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Manifest contains no plugin descriptors")]
    NoDescriptors,
}

/// One release entry as this tool writes it.
///
/// Field declaration order is the key order in the serialized file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Release version string, recorded verbatim.
    pub version: String,

    /// Hex-encoded MD5 digest of the release artifact.
    pub checksum: String,

    /// Download URL for the packaged artifact.
    pub source_url: String,

    /// Changelog pointer (constant across releases).
    pub changelog: String,

    /// Minimum host ABI the release supports (constant across releases).
    pub target_abi: String,

    /// Local wall-clock time the record was created.
    pub timestamp: String,
}

impl VersionRecord {
    /// Create a record stamped with the current local time.
    pub fn new(
        version: impl Into<String>,
        checksum: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(version, checksum, source_url, Local::now())
    }

    /// Create a record with a specific creation time (for testing).
    pub fn with_timestamp(
        version: impl Into<String>,
        checksum: impl Into<String>,
        source_url: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            version: version.into(),
            checksum: checksum.into(),
            source_url: source_url.into(),
            changelog: CHANGELOG.to_string(),
            target_abi: TARGET_ABI.to_string(),
            timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// One plugin in the catalog.
///
/// Only `versions` is modeled. Every other key (`guid`, `name`, `overview`,
/// whatever the catalog carries) rides through the flattened map verbatim,
/// keeping its relative order. `versions` itself always serializes last,
/// the position it holds in the live catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,

    /// Release entries in append order, most recent last. Existing entries
    /// are carried as raw values and never re-validated against the record
    /// shape.
    pub versions: Vec<serde_json::Value>,
}

/// The plugin catalog: an ordered list of plugin descriptors.
///
/// A full invocation is one read-modify-write cycle on the backing file.
/// There is no locking; the CI pipeline runs one release step at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub plugins: Vec<PluginDescriptor>,
}

impl Manifest {
    /// Load the manifest from disk.
    ///
    /// A missing file or malformed JSON is an error; a descriptor without a
    /// `versions` key fails to parse.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Append one release record to the first descriptor's version list.
    pub fn append_release(&mut self, record: &VersionRecord) -> ManifestResult<()> {
        let descriptor = self
            .plugins
            .first_mut()
            .ok_or(ManifestError::NoDescriptors)?;
        descriptor.versions.push(serde_json::to_value(record)?);
        Ok(())
    }

    /// Rewrite the manifest in place with 4-space indentation.
    ///
    /// Plain full overwrite, no rename or backup; the write only happens
    /// after a successful in-memory load.
    pub fn save(&self, path: &Path) -> ManifestResult<()> {
        fs::write(path, self.to_json_bytes()?)?;
        Ok(())
    }

    /// Number of plugin descriptors in the catalog.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Serialize with the 4-space indentation the catalog uses.
    fn to_json_bytes(&self) -> ManifestResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}
