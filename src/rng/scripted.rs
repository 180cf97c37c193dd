// scripted.rs - Replays a fixed list of draws
//
// Used to pin the draw protocol in tests and to reproduce a landscape from
// a recorded fxrand stream.

use super::RandomSource;
use crate::error::{Error, Result};

pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
}

impl Scripted {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    /// Values not yet handed out
    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }
}

impl RandomSource for Scripted {
    fn next(&mut self) -> Result<f64> {
        let value = *self.values.get(self.pos).ok_or(Error::SeedExhausted(self.pos))?;
        self.pos += 1;
        Ok(value)
    }
}
