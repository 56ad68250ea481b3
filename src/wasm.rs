//! JavaScript bindings. Thin wrappers only; behavior lives in the native
//! modules.

use wasm_bindgen::prelude::*;

use crate::generator::SeededRng;
use crate::hamming::HammingDistanceCalculator;
use crate::simple_function;

/// Seeded generator, exposed to JS as `Rand`.
#[wasm_bindgen(js_name = Rand)]
pub struct JsRand {
    inner: SeededRng,
}

#[wasm_bindgen(js_class = Rand)]
impl JsRand {
    /// Seeds from `seed`, or from 0 when it is omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> JsRand {
        JsRand {
            inner: SeededRng::new(u64::from(seed.unwrap_or(0))),
        }
    }

    #[wasm_bindgen(js_name = set_seed)]
    pub fn set_seed(&mut self, seed: u32) {
        self.inner.set_seed(u64::from(seed));
    }

    /// Next draw in the open interval (0, 1).
    pub fn next(&mut self) -> f64 {
        self.inner.next()
    }
}

#[wasm_bindgen(js_name = HammingDistanceCalculator)]
pub struct JsHammingDistanceCalculator {
    inner: HammingDistanceCalculator,
}

#[wasm_bindgen(js_class = HammingDistanceCalculator)]
impl JsHammingDistanceCalculator {
    /// Throws when `a` and `b` differ in length.
    #[wasm_bindgen(constructor)]
    pub fn new(a: Vec<u64>, b: Vec<u64>) -> Result<JsHammingDistanceCalculator, JsError> {
        let inner = HammingDistanceCalculator::new(a, b).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(JsHammingDistanceCalculator { inner })
    }

    pub fn calculate(&self) -> u64 {
        self.inner.calculate()
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }
}

#[wasm_bindgen]
pub fn add_integers(a: i32, b: i32) -> i32 {
    simple_function::add_integers(a, b)
}

#[wasm_bindgen]
pub fn add_doubles(a: f64, b: f64) -> f64 {
    simple_function::add_doubles(a, b)
}

#[wasm_bindgen]
pub fn add_generic_int(a: i32, b: i32) -> i32 {
    simple_function::add_generic(a, b)
}

#[wasm_bindgen]
pub fn add_generic_double(a: f64, b: f64) -> f64 {
    simple_function::add_generic(a, b)
}

#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}
