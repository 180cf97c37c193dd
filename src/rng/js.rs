// js.rs - Browser seed source
//
// Wraps the host's zero-argument random function (fxrand on fxhash).
// Anything that is not a function, throws, or returns a non-number is a
// startup error; there is no fallback stream.

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};

use super::RandomSource;
use crate::error::{Error, Result};

pub struct JsSource {
    func: Function,
}

impl JsSource {
    pub fn new(value: JsValue) -> Result<Self> {
        value
            .dyn_into::<Function>()
            .map(|func| Self { func })
            .map_err(|_| Error::SeedNotCallable)
    }
}

impl RandomSource for JsSource {
    fn next(&mut self) -> Result<f64> {
        let value = self
            .func
            .call0(&JsValue::NULL)
            .map_err(|e| Error::SeedCall(format!("{e:?}")))?;
        value
            .as_f64()
            .ok_or_else(|| Error::SeedNotANumber(format!("{value:?}")))
    }
}
