// chacha.rs - Native seed source
//
// ChaCha8 gives the same stream on every platform for a given seed, which
// is what the CLI and the tests need. Hash tokens are folded to a u64 with
// xxh3 so a token string maps to exactly one landscape.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh3::xxh3_64;

use super::RandomSource;
use crate::error::Result;

pub struct ChaChaSource(ChaCha8Rng);

impl ChaChaSource {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from a token such as an fxhash transaction hash
    pub fn from_hash(hash: &str) -> Self {
        Self::from_seed_u64(xxh3_64(hash.as_bytes()))
    }
}

impl RandomSource for ChaChaSource {
    fn next(&mut self) -> Result<f64> {
        Ok(self.0.r#gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(source: &mut ChaChaSource, n: usize) -> Vec<f64> {
        (0..n).map(|_| source.next().unwrap()).collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ChaChaSource::from_seed_u64(12345);
        let mut b = ChaChaSource::from_seed_u64(12345);
        assert_eq!(take(&mut a, 32), take(&mut b, 32));
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = ChaChaSource::from_seed_u64(1);
        let mut b = ChaChaSource::from_seed_u64(2);
        assert_ne!(take(&mut a, 8), take(&mut b, 8));
    }

    #[test]
    fn hash_tokens_are_stable() {
        let token = "ooWmY3oVhbmAAM6vWvNhbF9pTxwDRm47uSxCpvzW2r4MrgM6pLx";
        let mut a = ChaChaSource::from_hash(token);
        let mut b = ChaChaSource::from_hash(token);
        assert_eq!(take(&mut a, 8), take(&mut b, 8));
    }

    #[test]
    fn values_are_unit_interval() {
        let mut source = ChaChaSource::from_seed_u64(7);
        for v in take(&mut source, 1000) {
            assert!((0.0..1.0).contains(&v));
        }
    }
}
