// export.rs - PNG and JSON writers

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use landscape_engine::texture::Raster;
use serde::Serialize;

pub fn write_png(path: &Path, raster: &Raster) -> Result<()> {
    let img = RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
        .context("raster size does not match its pixel buffer")?;
    img.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("  {} ({}x{})", path.display(), raster.width(), raster.height());
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("  {}", path.display());
    Ok(())
}
