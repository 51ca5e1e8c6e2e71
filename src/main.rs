use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use trust_export::{PemBundleStore, TrustStoreExporter};

/// Export trusted root certificates as concatenated PEM blocks.
#[derive(Debug, Parser)]
#[command(name = "trust-export", version, about)]
struct Args {
    /// Read trust anchors from a PEM bundle file instead of the system store
    #[arg(long, value_name = "FILE")]
    bundle: Option<PathBuf>,

    /// Write the export to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let result = match &args.bundle {
        Some(path) => TrustStoreExporter::new(PemBundleStore::new(path)).export(),
        None => TrustStoreExporter::native().export(),
    };
    info!(
        "exported {} certificates ({} malformed, {} duplicates skipped)",
        result.len(),
        result.skipped_invalid,
        result.skipped_duplicates
    );

    let mut text = String::new();
    for certificate in &result.certificates {
        text.push_str(certificate.as_str());
    }

    match &args.output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
