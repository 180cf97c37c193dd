// landscape2png - Render a landscape's textures and metadata to disk
//
// Pipeline:
//   1. Seed ChaCha8 from --seed or an fxhash-style --hash token
//   2. Derive parameters, features and both textures
//   3. Write grid.png, displacement.png, features.json, scene.json
//
// Usage: cargo run --bin landscape2png -- --hash <token> [--preview] [--out DIR]

mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use landscape_engine::rng::ChaChaSource;
use landscape_engine::{Landscape, RenderOptions};

/// Seed used when neither --seed nor --hash is given
const DEFAULT_SEED: u64 = 42;

#[derive(Parser)]
#[command(name = "landscape2png")]
#[command(about = "Render a seeded synthwave landscape's textures to PNG")]
#[command(version)]
struct Args {
    /// Numeric seed
    #[arg(long, conflicts_with = "hash")]
    seed: Option<u64>,

    /// Hash token, e.g. an fxhash transaction hash
    #[arg(long)]
    hash: Option<String>,

    /// Use the thumbnail staging (closer camera, no rotation)
    #[arg(long)]
    preview: bool,

    /// Mark the scene for fixed-size download capture
    #[arg(long)]
    download: bool,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let source = match (&args.hash, args.seed) {
        (Some(hash), _) => ChaChaSource::from_hash(hash),
        (None, seed) => ChaChaSource::from_seed_u64(seed.unwrap_or(DEFAULT_SEED)),
    };
    let options = RenderOptions { preview: args.preview, enable_download: args.download };

    let landscape = Landscape::generate(source, options).context("failed to generate landscape")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    export::write_png(&args.out.join("grid.png"), &landscape.grid)?;
    export::write_png(&args.out.join("displacement.png"), &landscape.displacement)?;
    export::write_json(&args.out.join("features.json"), &landscape.features)?;
    export::write_json(&args.out.join("scene.json"), &landscape.scene)?;

    tracing::info!(out = %args.out.display(), features = ?landscape.features, "done");
    Ok(())
}
