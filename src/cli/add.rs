use crate::models::{Manifest, VersionRecord};
use crate::release::ReleaseSource;
use crate::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::Path;

/// Manifest file name, resolved relative to the working directory.
pub const MANIFEST_FILE: &str = "manifest.json";

pub fn run(version: &str, source: ReleaseSource) -> Result<()> {
    let manifest_path = env::current_dir()?.join(MANIFEST_FILE);
    let record = run_impl(&manifest_path, version, source)?;

    println!(
        "{}",
        format!("✅ Appended {} to {}", record.version, MANIFEST_FILE).green()
    );
    println!("   checksum:  {}", record.checksum);
    println!("   sourceUrl: {}", record.source_url);

    Ok(())
}

/// Internal implementation that accepts the manifest path for testability.
/// This prevents tests from mutating the global CWD.
pub fn run_impl(
    manifest_path: &Path,
    version: &str,
    source: ReleaseSource,
) -> Result<VersionRecord> {
    let mut manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    let record = source.into_record(version)?;
    manifest.append_release(&record)?;

    manifest
        .save(manifest_path)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok(record)
}
