use wasm_bindgen::prelude::*;

pub mod classify;
pub mod error;
pub mod features;
pub mod landscape;
pub mod params;
pub mod rng;
pub mod scene;
pub mod texture;

pub use error::Error;
pub use features::Features;
pub use landscape::Landscape;
pub use params::SceneParameters;
pub use scene::{Animator, RenderOptions, SceneDescriptor};

use rng::JsSource;

// ============================================================================
// LANDSCAPE - Seeded synthwave landscape for the page's 3D engine
// ============================================================================
//
// JS side:
//   const land = new Landscape(fxrand, isFxpreview, false)
//   window.$fxhashFeatures = JSON.parse(land.features())
//   const grid = new Uint8ClampedArray(memory.buffer, land.grid_ptr(), land.grid_len())
//   ...
//   tick: plane.rotation.z = land.rotation_z(clock.getElapsedTime())

#[wasm_bindgen(js_name = Landscape)]
pub struct WasmLandscape {
    inner: Landscape,
    features: String,
    scene: String,
}

#[wasm_bindgen(js_class = Landscape)]
impl WasmLandscape {
    /// Fails (throws) if `seed` is not a function or returns anything other
    /// than a number in [0, 1).
    #[wasm_bindgen(constructor)]
    pub fn new(seed: JsValue, preview: bool, enable_download: bool) -> Result<WasmLandscape, JsError> {
        let source = JsSource::new(seed).map_err(to_js)?;
        let options = RenderOptions { preview, enable_download };
        let inner = Landscape::generate(source, options).map_err(to_js)?;

        let features = inner.features.to_json().map_err(to_js)?;
        let scene = inner.scene.to_json().map_err(to_js)?;

        Ok(Self { inner, features, scene })
    }

    /// Feature map as a JSON object string
    pub fn features(&self) -> String { self.features.clone() }

    /// Scene descriptor as a JSON object string
    pub fn scene(&self) -> String { self.scene.clone() }

    pub fn rotation_z(&self, elapsed: f64) -> f64 {
        self.inner.animator.rotation_z(elapsed)
    }

    pub fn bloom_strength(&self) -> f64 { self.inner.params.bloom_strength }
    pub fn displacement_scale(&self) -> f64 { self.inner.params.max_height }
    pub fn transparent(&self) -> bool { self.inner.params.transparent }
    pub fn lane_color(&self) -> String { self.inner.params.lane_color() }

    // Texture buffers (RGBA8, square)
    pub fn grid_ptr(&self) -> *const u8 { self.inner.grid.ptr() }
    pub fn grid_len(&self) -> usize { self.inner.grid.len() }
    pub fn grid_size(&self) -> u32 { self.inner.grid.width() }

    pub fn displacement_ptr(&self) -> *const u8 { self.inner.displacement.ptr() }
    pub fn displacement_len(&self) -> usize { self.inner.displacement.len() }
    pub fn displacement_size(&self) -> u32 { self.inner.displacement.width() }
}

fn to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}
