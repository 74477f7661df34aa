use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod bucket;
mod cli;
mod error;
mod fetch;
mod formula;
mod update;
mod util;

use cli::{BucketArgs, Command, FormulaArgs, RootArgs, FORMULA_PATH};
use fetch::HttpFetcher;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Formula(args) => cmd_formula(args),
        Command::Bucket(args) => cmd_bucket(args),
    }
}

fn cmd_formula(args: FormulaArgs) -> Result<()> {
    update::sync_formula(Path::new(FORMULA_PATH), &args.version, &HttpFetcher)?;
    println!("Homebrew formula updated to v{}.", args.version);
    Ok(())
}

fn cmd_bucket(args: BucketArgs) -> Result<()> {
    update::sync_bucket(&args.manifest, &args.version, &HttpFetcher)?;
    println!("Scoop bucket manifest updated to v{}.", args.version);
    Ok(())
}
