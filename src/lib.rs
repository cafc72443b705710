// Relman - Release manifest updater
// Appends one version record per CI release to the plugin catalog manifest

pub mod checksum;
pub mod cli;
pub mod models;
pub mod release;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{Manifest, ManifestError, PluginDescriptor, VersionRecord};
pub use release::ReleaseSource;
