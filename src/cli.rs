//! CLI argument parsing for the manifest sync flows.
//!
//! The CLI is intentionally thin: each subcommand maps to one manifest flow
//! with no shared state, so the update logic stays reusable and testable.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Formula filename the text flow operates on, relative to the working
/// directory.
pub const FORMULA_PATH: &str = "piscator.rb";

/// Root CLI entrypoint for manifest synchronization.
#[derive(Parser, Debug)]
#[command(
    name = "tapsync",
    version,
    about = "Sync Homebrew formula and Scoop bucket manifests with release checksums",
    after_help = "Examples:\n  tapsync formula 1.2.3\n  tapsync bucket 1.2.3 bucket/piscator.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Manifest flows, one per distribution channel.
#[derive(Subcommand, Debug)]
pub enum Command {
    Formula(FormulaArgs),
    Bucket(BucketArgs),
}

/// Formula flow inputs; operates on `piscator.rb` in the working directory.
#[derive(Parser, Debug)]
#[command(about = "Update the Homebrew formula with fresh release checksums")]
pub struct FormulaArgs {
    /// Release version to stamp into the formula (without the `v` prefix)
    #[arg(value_name = "VERSION")]
    pub version: String,
}

/// Bucket flow inputs for a single JSON manifest.
#[derive(Parser, Debug)]
#[command(about = "Update a Scoop bucket manifest with fresh release checksums")]
pub struct BucketArgs {
    /// Release version to stamp into the manifest (without the `v` prefix)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Path to the bucket JSON manifest
    #[arg(value_name = "PATH")]
    pub manifest: PathBuf,
}
