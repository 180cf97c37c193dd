// landscape.rs - Seed to finished scene inputs
//
// Runs the whole pipeline once: parameters, features, then the two
// texture sequences. The grid sequence is drawn before the displacement
// sequence; monochrome scenes take one draw and repeat it for every line.

use tracing::info;

use crate::error::Result;
use crate::features::Features;
use crate::params::SceneParameters;
use crate::rng::{Prng, RandomSource};
use crate::scene::{Animator, RenderOptions, SceneDescriptor};
use crate::texture::{GridSpec, Hsl, Lane, Raster, displacement, grid};

pub struct Landscape {
    pub params: SceneParameters,
    pub features: Features,
    pub grid: Raster,
    pub displacement: Raster,
    pub scene: SceneDescriptor,
    pub animator: Animator,
}

impl Landscape {
    pub fn generate<S: RandomSource>(source: S, options: RenderOptions) -> Result<Self> {
        let mut prng = Prng::new(source);

        let params = SceneParameters::derive(&mut prng)?;
        let features = Features::from_params(&params);

        let fill_with = if params.colorful { None } else { Some(prng.draw()?) };
        let grid_values = prng.list(params.grid_elements as usize + 1, fill_with)?;
        let grid = grid::generate(&grid_values, &grid_spec(&params));

        let displacement_values = prng.list(params.mountains as usize, None)?;
        let displacement =
            displacement::generate(&displacement_values, params.grid_elements, &lane(&params));

        info!(
            draws = prng.draws(),
            grid = grid.width(),
            displacement = displacement.width(),
            starlight = params.is_starlight(),
            "landscape generated"
        );

        Ok(Self {
            scene: SceneDescriptor::new(&params, options),
            animator: Animator::new(options),
            params,
            features,
            grid,
            displacement,
        })
    }
}

pub fn grid_spec(p: &SceneParameters) -> GridSpec {
    GridSpec {
        elements: p.grid_elements,
        resolution_multiplier: p.grid_resolution_multiplier,
        line_width: p.grid_line_width,
        saturation: p.grid_saturation,
        lightness: p.grid_lightness,
    }
}

pub fn lane(p: &SceneParameters) -> Lane {
    Lane {
        x: p.lane_x,
        y: p.lane_y,
        width: p.lane_width as f64,
        color: Hsl::gray(p.lane_darkness as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    // Colorful, 12 elements, lane darkness 55, 50 mountains
    const BASE: [f64; 10] = [0.0, 0.1, 0.0, 0.5, 0.5, 0.5, 0.0, 0.9, 0.5, 0.99];

    #[test]
    fn colorful_draws_every_grid_line() {
        let mut values = BASE.to_vec();
        values.extend((0..13).map(|i| i as f64 / 13.0));
        values.extend(std::iter::repeat_n(0.5, 50));

        let mut source = Scripted::new(values);
        let l = Landscape::generate(&mut source, RenderOptions::default()).unwrap();
        assert_eq!(source.remaining(), 0);
        assert_eq!(l.grid.width(), 144);
        assert_eq!(l.displacement.width(), 12);
        assert_eq!(l.features.color, "rainbow");
    }

    #[test]
    fn monochrome_takes_one_grid_draw() {
        let mut values = BASE.to_vec();
        values[3] = 0.1;
        values.push(0.3);
        values.extend(std::iter::repeat_n(0.5, 50));

        let mut source = Scripted::new(values);
        let l = Landscape::generate(&mut source, RenderOptions::default()).unwrap();
        assert_eq!(source.remaining(), 0);
        assert!(!l.params.colorful);
        assert!(l.params.is_starlight());

        // starlight: every painted grid pixel is gray
        for px in l.grid.pixels().chunks_exact(4) {
            assert!(px[0] == px[1] && px[1] == px[2]);
        }
    }

    #[test]
    fn short_seed_stream_is_an_error() {
        let source = Scripted::new(BASE.to_vec());
        assert!(Landscape::generate(source, RenderOptions::default()).is_err());
    }

    #[test]
    fn lane_is_painted_from_params() {
        let mut values = BASE.to_vec();
        values.extend((0..13).map(|i| i as f64 / 13.0));
        values.extend(std::iter::repeat_n(0.5, 50));

        let l = Landscape::generate(Scripted::new(values), RenderOptions::default()).unwrap();
        // lane x = 5, width 2
        let gray = Hsl::gray(55.0).to_rgba();
        for y in 0..12 {
            assert_eq!(l.displacement.get(5, y), Some(gray));
            assert_eq!(l.displacement.get(6, y), Some(gray));
        }
    }
}
