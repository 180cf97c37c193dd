// params.rs - Seed-driven scene parameters
//
// Draw protocol. Each numbered step takes the next value(s) from the seed,
// in this order, exactly once per landscape:
//
//    1. grid elements         int   [12, 48]
//    2. grid line width       int   [2, 15]
//    3. mountains             int   [50, 500]
//    4. colorful              draw > 0.25
//    5. lane darkness         draw > 0.75 ? 0 : int [10, 100] (second draw)
//    6. lane width            int   [elements / 6, elements / 4]
//    7. lane x / y            no draw
//    8. transparent           draw < 0.25
//    9. max height            float [0.2, 0.6)
//   10. bloom strength        float [0.2, 0.75)
//
// Texture sequences are drawn after step 10 (see landscape.rs). Moving any
// step changes every value after it for a given seed.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::rng::{Prng, RandomSource, int_between, pseudo_random_between};

pub const GRID_ELEMENTS: (u32, u32) = (12, 48);
pub const GRID_LINE_WIDTH: (u32, u32) = (2, 15);
pub const MOUNTAINS: (u32, u32) = (50, 500);
pub const LANE_DARKNESS: (u32, u32) = (10, 100);
pub const MAX_HEIGHT: (f64, f64) = (0.2, 0.6);
pub const BLOOM_STRENGTH: (f64, f64) = (0.2, 0.75);

const COLORFUL_ABOVE: f64 = 0.25;
const DARK_LANE_ABOVE: f64 = 0.75;
const TRANSPARENT_BELOW: f64 = 0.25;

pub const GRID_SATURATION: f64 = 100.0;
pub const GRID_LIGHTNESS: f64 = 10.0;

// Starlight: monochrome, high bloom and thin lines
const STARLIGHT_MIN_BLOOM: f64 = 0.725;
const STARLIGHT_MAX_LINE_WIDTH: u32 = 4;
const STARLIGHT_BLOOM: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneParameters {
    pub grid_elements: u32,
    pub grid_line_width: u32,
    /// Grid texture side is `grid_elements * grid_resolution_multiplier`
    pub grid_resolution_multiplier: u32,
    /// HSL saturation in percent, 100 or 0 after the starlight pass
    pub grid_saturation: f64,
    pub grid_lightness: f64,
    pub mountains: u32,
    pub colorful: bool,
    /// Lane lightness in percent, 0 for a black lane
    pub lane_darkness: u32,
    pub lane_width: u32,
    pub lane_x: f64,
    pub lane_y: f64,
    pub transparent: bool,
    /// Displacement scale of the mesh
    pub max_height: f64,
    pub bloom_strength: f64,
}

impl SceneParameters {
    /// Derive from the seed, then run the starlight pass.
    pub fn derive<S: RandomSource>(prng: &mut Prng<S>) -> Result<Self> {
        let base = Self::draw_base(prng)?;
        let params = apply_starlight(base);
        debug!(?params, draws = prng.draws(), "derived scene parameters");
        Ok(params)
    }

    fn draw_base<S: RandomSource>(prng: &mut Prng<S>) -> Result<Self> {
        // 1
        let grid_elements = int_between(prng.draw()?, GRID_ELEMENTS.0, GRID_ELEMENTS.1);
        // 2
        let grid_line_width = int_between(prng.draw()?, GRID_LINE_WIDTH.0, GRID_LINE_WIDTH.1);
        // 3
        let mountains = int_between(prng.draw()?, MOUNTAINS.0, MOUNTAINS.1);
        // 4
        let colorful = prng.draw()? > COLORFUL_ABOVE;
        // 5
        let lane_darkness = if prng.draw()? > DARK_LANE_ABOVE {
            0
        } else {
            int_between(prng.draw()?, LANE_DARKNESS.0, LANE_DARKNESS.1)
        };
        // 6
        let elements = grid_elements as f64;
        let lane_width =
            pseudo_random_between(prng.draw()?, elements / 6.0, elements / 4.0, true) as u32;
        // 7
        let lane_x = elements / 2.0 - lane_width as f64 * 0.5;
        let lane_y = 0.0;
        // 8
        let transparent = prng.draw()? < TRANSPARENT_BELOW;
        // 9
        let max_height = pseudo_random_between(prng.draw()?, MAX_HEIGHT.0, MAX_HEIGHT.1, false);
        // 10
        let bloom_strength =
            pseudo_random_between(prng.draw()?, BLOOM_STRENGTH.0, BLOOM_STRENGTH.1, false);

        Ok(Self {
            grid_elements,
            grid_line_width,
            grid_resolution_multiplier: grid_elements,
            grid_saturation: GRID_SATURATION,
            grid_lightness: GRID_LIGHTNESS,
            mountains,
            colorful,
            lane_darkness,
            lane_width,
            lane_x,
            lane_y,
            transparent,
            max_height,
            bloom_strength,
        })
    }

    /// CSS color of the lane band
    pub fn lane_color(&self) -> String {
        format!("hsl(0, 0%, {}%)", self.lane_darkness)
    }

    pub fn grid_texture_size(&self) -> u32 {
        self.grid_elements * self.grid_resolution_multiplier
    }

    pub fn is_starlight(&self) -> bool {
        starlight_applies(self)
    }
}

fn starlight_applies(p: &SceneParameters) -> bool {
    !p.colorful
        && p.bloom_strength >= STARLIGHT_MIN_BLOOM
        && p.grid_line_width <= STARLIGHT_MAX_LINE_WIDTH
}

/// Force monochrome grid lines and strong bloom for starlight scenes.
///
/// Runs once, after the base draws and before anything reads the parameters.
pub fn apply_starlight(mut params: SceneParameters) -> SceneParameters {
    if starlight_applies(&params) {
        params.grid_saturation = 0.0;
        params.bloom_strength = STARLIGHT_BLOOM;
    }
    params
}
