//! Anchor-based mutation of the Homebrew formula text.
//!
//! The formula is never parsed as Ruby. Each volatile field sits next to a
//! stable anchor (the architecture marker trailing a `sha256` line, or the
//! single `version` declaration), and mutation rewrites only the quoted value
//! next to the anchor, leaving every other byte verbatim. Zero matches means
//! the formula no longer has the expected shape, which is fatal.

use crate::error::SyncError;
use regex::{NoExpand, Regex};

/// Release download location the formula artifacts are published under.
pub const RELEASE_BASE_URL: &str = "https://github.com/shimman-dev/piscator/releases/download";

/// Artifact name embedded in release tarball filenames.
pub const ARTIFACT_NAME: &str = "piscator";

/// Published checksum location for one architecture of one release.
pub fn checksum_url(version: &str, arch: &str) -> String {
    format!("{RELEASE_BASE_URL}/v{version}/{ARTIFACT_NAME}-v{version}-{arch}.tar.gz.sha256")
}

/// Rewrite the `sha256 "..." # <arch>` anchor for `arch` with a new checksum.
///
/// Every occurrence for the architecture is rewritten; the marker and all
/// surrounding text are preserved.
pub fn replace_checksum(doc: &str, arch: &str, checksum: &str) -> Result<String, SyncError> {
    let pattern = format!(r#"sha256 ".*" # {}"#, regex::escape(arch));
    let re = Regex::new(&pattern).expect("regex for sha256 anchor");
    if !re.is_match(doc) {
        return Err(SyncError::AnchorNotFound {
            arch: arch.to_string(),
        });
    }
    let replacement = format!(r#"sha256 "{checksum}" # {arch}"#);
    Ok(re.replace_all(doc, NoExpand(&replacement)).into_owned())
}

/// Rewrite the single `version "..."` declaration with a new version.
pub fn replace_version(doc: &str, version: &str) -> Result<String, SyncError> {
    let re = Regex::new(r#"version ".*?""#).expect("regex for version declaration");
    if !re.is_match(doc) {
        return Err(SyncError::VersionNotFound);
    }
    let replacement = format!(r#"version "{version}""#);
    Ok(re.replace_all(doc, NoExpand(&replacement)).into_owned())
}

#[cfg(test)]
#[path = "formula_tests.rs"]
mod tests;
