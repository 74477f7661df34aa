//! Domain errors for manifest synchronization.
//!
//! Every variant is fatal: the run aborts on the first error without writing
//! the manifest, so the on-disk state stays recoverable.

use thiserror::Error;

/// Errors raised while fetching checksums or locating manifest anchors.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Transport failure or non-2xx status while retrieving a checksum.
    #[error("failed to download {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The fetched body is not a sha256 hex digest (error page, empty body).
    #[error("response from {url} is not a sha256 digest: {body:?}")]
    MalformedChecksum { url: String, body: String },

    /// No `sha256 "..." # <arch>` anchor for this architecture in the formula.
    #[error("no sha256 anchor for architecture {arch} in formula")]
    AnchorNotFound { arch: String },

    /// No `version "..."` declaration in the formula.
    #[error("no version declaration in formula")]
    VersionNotFound,

    /// The bucket manifest has no entry for this architecture.
    #[error("architecture {arch} missing from bucket manifest")]
    MissingArch { arch: String },
}
