//! Release input resolution
//!
//! CI hands this tool the release checksum in one of three shapes. All three
//! funnel into the same `VersionRecord` so the manifest append logic never
//! branches on where the checksum came from.

use crate::checksum;
use crate::models::VersionRecord;
use anyhow::Result;
use std::path::PathBuf;

/// Where the release checksum and download URL come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseSource {
    /// Hash a local artifact file; the download URL is derived from the version.
    FromArtifactFile { path: PathBuf },
    /// Use a precomputed checksum; the download URL is derived from the version.
    FromChecksum { value: String },
    /// Use a precomputed checksum together with an explicit download URL.
    FromChecksumAndUrl { value: String, url: String },
}

impl ReleaseSource {
    /// Resolve this source into the record appended to the manifest.
    pub fn into_record(self, version: &str) -> Result<VersionRecord> {
        let (checksum, source_url) = match self {
            ReleaseSource::FromArtifactFile { path } => {
                (checksum::file_md5(&path)?, release_source_url(version))
            }
            ReleaseSource::FromChecksum { value } => (value, release_source_url(version)),
            ReleaseSource::FromChecksumAndUrl { value, url } => (value, url),
        };

        Ok(VersionRecord::new(version, checksum, source_url))
    }
}

/// Download URL of the packaged skill for a given release tag.
pub fn release_source_url(version: &str) -> String {
    format!(
        "https://github.com/infinityofspace/jellyfin-alexa-plugin/releases/download/{}/AlexaSkill_{}.zip",
        version, version
    )
}
