//! Checksum retrieval from published release artifacts.
//!
//! The network collaborator is isolated behind a trait so the update flows
//! stay deterministic and testable without a live release.

use crate::error::SyncError;

/// Length of a hex-encoded sha256 digest.
const SHA256_HEX_LEN: usize = 64;

/// External collaborator that resolves a checksum URL to its published value.
pub trait ChecksumFetcher {
    /// Retrieve the checksum text at `url`, trimmed to the bare token.
    fn fetch(&self, url: &str) -> Result<String, SyncError>;
}

/// Blocking HTTP fetcher used by the CLI.
pub struct HttpFetcher;

impl ChecksumFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, SyncError> {
        let mut response = ureq::get(url).call().map_err(|err| SyncError::Fetch {
            url: url.to_string(),
            source: Box::new(err),
        })?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| SyncError::Fetch {
                url: url.to_string(),
                source: Box::new(err),
            })?;
        Ok(body.trim().to_string())
    }
}

/// Reject fetched bodies that are not a sha256 digest before any mutation.
///
/// Release hosts serve error pages with a 200 status often enough that an
/// unchecked body would be embedded in the manifest verbatim.
pub fn validate_sha256_hex(url: &str, token: &str) -> Result<(), SyncError> {
    let well_formed =
        token.len() == SHA256_HEX_LEN && token.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(SyncError::MalformedChecksum {
            url: url.to_string(),
            body: crate::util::truncate_string(token, 128),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
