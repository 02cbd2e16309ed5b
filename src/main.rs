//! syncsplit binary: split one sync manifest into N shard manifests.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use syncsplit::{codec, partition};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Split an image-sync manifest into per-worker shard manifests.
#[derive(Debug, Parser)]
#[command(name = "syncsplit", version, about)]
struct Cli {
    /// Path of the manifest to split.
    #[arg(long)]
    source: PathBuf,

    /// Directory the shard manifests are written into.
    #[arg(long)]
    dest: PathBuf,

    /// Number of shard manifests to produce.
    #[arg(long)]
    shards: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.shards == 0 {
        bail!("--shards must be at least 1");
    }

    let manifest = codec::read_manifest(&cli.source)
        .with_context(|| format!("reading manifest {}", cli.source.display()))?;
    let shards = partition(&manifest, cli.shards).context("partitioning manifest")?;
    let written = codec::write_shards(&cli.dest, &shards)
        .with_context(|| format!("writing shards to {}", cli.dest.display()))?;

    println!(
        "wrote {} shard manifests to {}",
        written.len(),
        cli.dest.display()
    );
    Ok(())
}
