// texture/ - Procedural rasters handed to the 3D engine
//
// Two square RGBA8 buffers per landscape: the grid-line color map and the
// displacement (height) map. Both start fully transparent, like a fresh
// canvas, and are never redrawn once generated.

mod color;
pub mod displacement;
pub mod grid;

pub use color::Hsl;
pub use displacement::Lane;
pub use grid::{Axis, GridSpec, Stroke};

/// RGBA8 raster, row-major
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }
    #[inline]
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at (x, y), None outside the raster
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height { return None; }
        let i = ((y * self.width + x) * 4) as usize;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    #[inline]
    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height { return; }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Opaque fill of every pixel whose center lies in [x, x+w) × [y, y+h).
    ///
    /// Fractional edges snap by pixel center instead of being blended.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, rgba: [u8; 4]) {
        let (x0, x1) = self.span(x, x + w, self.width);
        let (y0, y1) = self.span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, rgba);
            }
        }
    }

    // Half-open pixel index range covered by [a, b) along an axis of `len`
    fn span(&self, a: f64, b: f64, len: u32) -> (u32, u32) {
        let first = (a - 0.5).ceil().max(0.0);
        let end = (b - 0.5).ceil().clamp(0.0, len as f64);
        if end <= first { return (0, 0); }
        (first as u32, end as u32)
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
