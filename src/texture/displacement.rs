// displacement.rs - Height map for the landscape mesh
//
// Scattered gray points (brighter = taller) with a solid lane painted
// down the middle afterwards. Each point reads its own value and the next
// one; the last point wraps around to the first.

use tracing::debug;

use super::{Hsl, Raster};
use crate::rng::int_between;

const MAX_POINT_LIGHTNESS: u32 = 140;

/// The flat road band
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lane {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub color: Hsl,
}

/// One 1x1 noise point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
    pub color: Hsl,
}

/// Noise points in paint order.
pub fn points(values: &[f64], elements: u32) -> Vec<Point> {
    let n = values.len();
    let last = elements.saturating_sub(1);

    values
        .iter()
        .enumerate()
        .map(|(i, &random)| {
            let next = values[(i + 1) % n];
            let lightness = int_between(next, 0, MAX_POINT_LIGHTNESS) as f64;
            Point {
                x: int_between(random, 0, last),
                y: int_between(next, 0, last),
                color: Hsl::new(360.0 * random, 0.0, lightness),
            }
        })
        .collect()
}

/// Paint the displacement map: `elements` square, points first, lane on top.
pub fn generate(values: &[f64], elements: u32, lane: &Lane) -> Raster {
    let mut raster = Raster::square(elements);

    for p in points(values, elements) {
        raster.put(p.x, p.y, p.color.to_rgba());
    }

    raster.fill_rect(lane.x, lane.y, lane.width, elements as f64, lane.color.to_rgba());

    debug!(elements, points = values.len(), lane_x = lane.x, lane_width = lane.width, "generated displacement texture");
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: [u8; 4] = [0; 4];

    fn lane(x: f64, width: f64, lightness: f64) -> Lane {
        Lane { x, y: 0.0, width, color: Hsl::gray(lightness) }
    }

    #[test]
    fn single_value_wraps_to_itself() {
        let p = points(&[0.5], 12);
        assert_eq!(p.len(), 1);
        assert_eq!((p[0].x, p[0].y), (6, 6));
        // floor(0.5 * 141) = 70
        assert_eq!(p[0].color, Hsl::new(180.0, 0.0, 70.0));
    }

    #[test]
    fn lookahead_uses_next_value() {
        let p = points(&[0.0, 0.25, 0.9], 12);
        assert_eq!((p[0].x, p[0].y), (0, 3));
        assert_eq!((p[1].x, p[1].y), (3, 10));
        // last point wraps: y and lightness come from values[0]
        assert_eq!((p[2].x, p[2].y), (10, 0));
        assert_eq!(p[2].color.l, 0.0);
        assert_eq!(p[1].color.l, 126.0);
    }

    #[test]
    fn bright_points_saturate_to_white() {
        let r = generate(&[0.0, 0.25, 0.9], 12, &lane(0.0, 0.0, 0.0));
        assert_eq!(r.get(3, 10), Some([255, 255, 255, 255]));
        assert_eq!(r.get(10, 0), Some([0, 0, 0, 255]));
        assert_eq!(r.get(5, 5), Some(CLEAR));
    }

    #[test]
    fn lane_spans_full_height_and_covers_noise() {
        // point at (6, 6), lane over columns 5..7
        let r = generate(&[0.5], 12, &lane(5.0, 2.0, 20.0));
        let gray = Hsl::gray(20.0).to_rgba();
        for y in 0..12 {
            assert_eq!(r.get(5, y), Some(gray));
            assert_eq!(r.get(6, y), Some(gray));
            assert_eq!(r.get(4, y), Some(CLEAR));
            assert_eq!(r.get(7, y), Some(CLEAR));
        }
    }

    #[test]
    fn black_lane_is_opaque() {
        let r = generate(&[0.5], 12, &lane(0.0, 1.0, 0.0));
        assert_eq!(r.get(0, 11), Some([0, 0, 0, 255]));
    }

    #[test]
    fn points_stay_on_canvas() {
        let values: Vec<f64> = (0..500).map(|i| (i as f64 * 0.618_033_988_7).fract()).collect();
        for elements in [12, 13, 30, 48] {
            for p in points(&values, elements) {
                assert!(p.x < elements && p.y < elements);
            }
        }
    }

    #[test]
    fn idempotent() {
        let values = [0.3, 0.7, 0.11, 0.42, 0.99];
        let l = lane(4.5, 3.0, 55.0);
        assert_eq!(generate(&values, 20, &l), generate(&values, 20, &l));
    }
}
