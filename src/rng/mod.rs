// rng/ - Deterministic random source
//
// The seed is owned by the host (fxrand in the browser, ChaCha8 natively).
// Prng only samples it: every scene parameter is a function of the order
// in which draws are taken, so callers must never reorder them.

mod chacha;
mod js;
mod scripted;

pub use chacha::ChaChaSource;
pub use js::JsSource;
pub use scripted::Scripted;

use crate::error::{Error, Result};

/// A zero-argument seeded generator returning values in [0, 1).
pub trait RandomSource {
    fn next(&mut self) -> Result<f64>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next(&mut self) -> Result<f64> {
        (**self).next()
    }
}

/// Counting wrapper around a seed source.
pub struct Prng<S> {
    source: S,
    draws: usize,
}

impl<S: RandomSource> Prng<S> {
    pub fn new(source: S) -> Self {
        Self { source, draws: 0 }
    }

    /// Next value in [0, 1). Anything else from the host is a hard error.
    pub fn draw(&mut self) -> Result<f64> {
        let value = self.source.next()?;
        if !(0.0..1.0).contains(&value) {
            return Err(Error::SeedOutOfRange(value));
        }
        self.draws += 1;
        Ok(value)
    }

    /// `size` values. With `fill_with` set this is `size` copies of that
    /// value and no draws are taken.
    pub fn list(&mut self, size: usize, fill_with: Option<f64>) -> Result<Vec<f64>> {
        match fill_with {
            Some(value) => Ok(vec![value; size]),
            None => (0..size).map(|_| self.draw()).collect(),
        }
    }

    /// Number of values taken from the source so far
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Map a draw `r` in [0, 1) onto `[min, max]`.
///
/// Rounded: `floor(r * (max - min + 1) + min)`, an inclusive integer bucket.
/// Unrounded: `r * (max - min) + min`, continuous in `[min, max)`.
/// Bounds may be fractional; the rounded form is applied to them unchanged.
#[inline]
pub fn pseudo_random_between(r: f64, min: f64, max: f64, round: bool) -> f64 {
    if round {
        (r * (max - min + 1.0) + min).floor()
    } else {
        r * (max - min) + min
    }
}

/// Rounded mapping for integer bounds.
#[inline]
pub fn int_between(r: f64, min: u32, max: u32) -> u32 {
    pseudo_random_between(r, min as f64, max as f64, true) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_draws_in_call_order() {
        let mut prng = Prng::new(Scripted::new(vec![0.1, 0.2, 0.3, 0.4]));
        assert_eq!(prng.draw().unwrap(), 0.1);
        assert_eq!(prng.list(3, None).unwrap(), vec![0.2, 0.3, 0.4]);
        assert_eq!(prng.draws(), 4);
    }

    #[test]
    fn fill_with_burns_no_draws() {
        let mut prng = Prng::new(Scripted::new(vec![0.5]));
        assert_eq!(prng.list(4, Some(0.7)).unwrap(), vec![0.7; 4]);
        assert_eq!(prng.draws(), 0);
        assert_eq!(prng.draw().unwrap(), 0.5);
    }

    #[test]
    fn list_of_zero_is_empty() {
        let mut prng = Prng::new(Scripted::new(vec![]));
        assert!(prng.list(0, None).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_draw_fails_fast() {
        let mut prng = Prng::new(Scripted::new(vec![1.0]));
        assert_eq!(prng.draw(), Err(Error::SeedOutOfRange(1.0)));

        let mut prng = Prng::new(Scripted::new(vec![f64::NAN]));
        assert!(matches!(prng.draw(), Err(Error::SeedOutOfRange(_))));
    }

    #[test]
    fn rounded_mapping_stays_in_bounds_and_is_monotonic() {
        for (min, max) in [(0.0, 0.0), (12.0, 48.0), (2.0, 15.0), (50.0, 500.0), (0.0, 140.0)] {
            let mut last = f64::MIN;
            for step in 0..10_000 {
                let r = step as f64 / 10_000.0;
                let v = pseudo_random_between(r, min, max, true);
                assert_eq!(v, v.floor());
                assert!(v >= min && v <= max, "{v} outside [{min}, {max}]");
                assert!(v >= last);
                last = v;
            }
            let top = pseudo_random_between(1.0 - f64::EPSILON, min, max, true);
            assert_eq!(top, max);
        }
    }

    #[test]
    fn unrounded_mapping_is_half_open() {
        for step in 0..1000 {
            let r = step as f64 / 1000.0;
            let v = pseudo_random_between(r, 0.2, 0.6, false);
            assert!((0.2..0.6).contains(&v));
        }
        assert_eq!(pseudo_random_between(0.0, 0.2, 0.75, false), 0.2);
    }

    #[test]
    fn fractional_bounds_pass_through() {
        // gridElements = 13: lane width bounds are 13/6 and 13/4
        let lo = 13.0 / 6.0;
        let hi = 13.0 / 4.0;
        assert_eq!(pseudo_random_between(0.0, lo, hi, true), 2.0);
        assert_eq!(pseudo_random_between(0.99, lo, hi, true), 4.0);
    }
}
