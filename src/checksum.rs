//! Artifact checksum calculation
//!
//! The plugin catalog records an MD5 digest per release because the host
//! application's installer verifies packages with MD5. The digest is computed
//! by streaming the file so release archives never have to fit in memory.

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read size for streaming the artifact through the hasher.
const CHUNK_SIZE: usize = 4096;

/// Calculate the hex-encoded MD5 digest of a file.
pub fn file_md5(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open artifact: {}", path.display()))?;

    let mut hasher = Md5::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read artifact: {}", path.display()))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
