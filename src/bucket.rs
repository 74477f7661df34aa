//! Scoop bucket manifest types and per-architecture mutation.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One architecture's download entry in the bucket manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchEntry {
    pub url: String,
    pub bin: Vec<String>,
    pub hash: String,
}

/// Top-level bucket manifest record.
///
/// Field order matches the persisted layout so a rewrite stays diffable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketManifest {
    pub version: String,
    pub architecture: BTreeMap<String, ArchEntry>,
    pub homepage: String,
    pub license: String,
    pub description: String,
}

impl BucketManifest {
    /// Version token embedded in download URLs, e.g. `v1.2.3`.
    pub fn version_token(&self) -> String {
        format!("v{}", self.version)
    }
}

/// Download URL for `arch` after substituting the release version token.
///
/// Every occurrence of the old token is replaced; the URL's embedded version
/// must match the manifest version once the update lands.
pub fn derive_url(
    manifest: &BucketManifest,
    arch: &str,
    old_token: &str,
    new_token: &str,
) -> Result<String, SyncError> {
    let entry = manifest
        .architecture
        .get(arch)
        .ok_or_else(|| SyncError::MissingArch {
            arch: arch.to_string(),
        })?;
    Ok(entry.url.replace(old_token, new_token))
}

/// Set the URL and checksum for one architecture entry.
pub fn update_entry(
    manifest: &mut BucketManifest,
    arch: &str,
    url: String,
    checksum: &str,
) -> Result<(), SyncError> {
    let entry = manifest
        .architecture
        .get_mut(arch)
        .ok_or_else(|| SyncError::MissingArch {
            arch: arch.to_string(),
        })?;
    entry.url = url;
    entry.hash = format!("sha256:{checksum}");
    Ok(())
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
