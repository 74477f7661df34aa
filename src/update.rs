//! Update orchestration and file persistence for both manifest flows.
//!
//! Mutations run purely in memory, folding each architecture's result into
//! the next step. The file on disk is written once, only after every step
//! succeeded; a mid-run failure leaves it byte-identical to the pre-run
//! state. The formula flow additionally copies the file to `<path>.bak`
//! before reading so a bad run can be recovered by hand.

use crate::bucket::{self, BucketManifest};
use crate::fetch::{validate_sha256_hex, ChecksumFetcher};
use crate::formula;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Architectures the formula publishes checksums for, in update order.
pub const ARCHITECTURES: [&str; 4] = [
    "darwin-amd64",
    "darwin-arm64",
    "linux-amd64",
    "linux-arm64",
];

/// Stamp the version and fold each architecture's fresh checksum into `doc`.
///
/// Aborts on the first fetch or anchor failure; architectures after the
/// failing one are not processed.
pub fn render_formula(
    doc: &str,
    version: &str,
    archs: &[&str],
    fetcher: &dyn ChecksumFetcher,
) -> Result<String> {
    let mut doc = formula::replace_version(doc, version)?;
    for arch in archs {
        let url = formula::checksum_url(version, arch);
        tracing::debug!(url = %url, "fetching checksum");
        let checksum = fetcher.fetch(&url)?;
        validate_sha256_hex(&url, &checksum)?;
        tracing::info!(arch = %arch, checksum = %checksum, "fetched release checksum");
        doc = formula::replace_checksum(&doc, arch, &checksum)?;
    }
    Ok(doc)
}

/// Update every architecture entry, then stamp the manifest version last.
///
/// The old version token is captured before stamping so the URL substitution
/// still sees it.
pub fn render_bucket(
    manifest: &mut BucketManifest,
    version: &str,
    fetcher: &dyn ChecksumFetcher,
) -> Result<()> {
    let old_token = manifest.version_token();
    let new_token = format!("v{version}");
    let archs: Vec<String> = manifest.architecture.keys().cloned().collect();
    for arch in &archs {
        let url = bucket::derive_url(manifest, arch, &old_token, &new_token)?;
        let checksum_url = format!("{url}.sha256");
        tracing::debug!(url = %checksum_url, "fetching checksum");
        let checksum = fetcher.fetch(&checksum_url)?;
        validate_sha256_hex(&checksum_url, &checksum)?;
        tracing::info!(arch = %arch, checksum = %checksum, "fetched release checksum");
        bucket::update_entry(manifest, arch, url, &checksum)?;
    }
    manifest.version = version.to_string();
    Ok(())
}

/// Sync the formula file on disk: backup, mutate in memory, write once.
pub fn sync_formula(path: &Path, version: &str, fetcher: &dyn ChecksumFetcher) -> Result<()> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .with_context(|| format!("backup {} to {}", path.display(), backup.display()))?;
    let doc =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let updated = render_formula(&doc, version, &ARCHITECTURES, fetcher)?;
    fs::write(path, updated).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Sync the bucket manifest file on disk with the same write-once discipline.
pub fn sync_bucket(path: &Path, version: &str, fetcher: &dyn ChecksumFetcher) -> Result<()> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut manifest: BucketManifest =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    render_bucket(&mut manifest, version, fetcher)?;
    let updated =
        serde_json::to_string_pretty(&manifest).context("serialize bucket manifest")?;
    fs::write(path, updated).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
