// grid.rs - Grid-line color map
//
// One vertical and one horizontal line per random value, spaced a cell
// apart starting at the edge. With elements + 1 values the last pair lands
// on the far edge, so only half of its width is visible.

use tracing::debug;

use super::{Hsl, Raster};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub elements: u32,
    pub resolution_multiplier: u32,
    pub line_width: u32,
    /// Percent; 0 turns every line gray
    pub saturation: f64,
    /// Percent
    pub lightness: f64,
}

impl GridSpec {
    pub fn texture_size(&self) -> u32 {
        self.elements * self.resolution_multiplier
    }

    /// Distance between neighbouring lines in pixels
    pub fn spacing(&self) -> f64 {
        self.texture_size() as f64 / self.elements as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// A full-length line across the texture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub axis: Axis,
    /// x for vertical lines, y for horizontal ones
    pub offset: f64,
    pub width: f64,
    pub color: Hsl,
}

/// Strokes in paint order: for each value, vertical first, then horizontal.
pub fn strokes(values: &[f64], spec: &GridSpec) -> Vec<Stroke> {
    let space = spec.spacing();
    let width = spec.line_width as f64;

    values
        .iter()
        .enumerate()
        .flat_map(|(i, &random)| {
            let color = Hsl::new(360.0 * random, spec.saturation, spec.lightness);
            let offset = space * i as f64;
            [Axis::Vertical, Axis::Horizontal].map(|axis| Stroke { axis, offset, width, color })
        })
        .collect()
}

/// Paint the grid texture.
pub fn generate(values: &[f64], spec: &GridSpec) -> Raster {
    let size = spec.texture_size();
    let mut raster = Raster::square(size);
    let strokes = strokes(values, spec);

    for s in &strokes {
        paint(&mut raster, s, size as f64);
    }

    debug!(size, strokes = strokes.len(), "generated grid texture");
    raster
}

fn paint(raster: &mut Raster, s: &Stroke, size: f64) {
    let half = s.width * 0.5;
    let rgba = s.color.to_rgba();
    match s.axis {
        Axis::Vertical => raster.fill_rect(s.offset - half, 0.0, s.width, size, rgba),
        Axis::Horizontal => raster.fill_rect(0.0, s.offset - half, size, s.width, rgba),
    }
}
