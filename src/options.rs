use starscape_core::{Ease, StarfieldConfig};
use wasm_bindgen::prelude::*;

/// Tuning knobs exposed to JavaScript. Unset fields keep their defaults.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct StarscapeOptions {
    config: StarfieldConfig,
}

#[wasm_bindgen]
impl StarscapeOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter = densityRatio)]
    pub fn density_ratio(&self) -> f32 {
        self.config.density_ratio
    }

    #[wasm_bindgen(setter = densityRatio)]
    pub fn set_density_ratio(&mut self, value: f32) {
        self.config.density_ratio = value;
    }

    #[wasm_bindgen(getter = sizeLimit)]
    pub fn size_limit(&self) -> f32 {
        self.config.size_limit
    }

    #[wasm_bindgen(setter = sizeLimit)]
    pub fn set_size_limit(&mut self, value: f32) {
        self.config.size_limit = value;
    }

    #[wasm_bindgen(getter = defaultAlpha)]
    pub fn default_alpha(&self) -> f32 {
        self.config.default_alpha
    }

    #[wasm_bindgen(setter = defaultAlpha)]
    pub fn set_default_alpha(&mut self, value: f32) {
        self.config.default_alpha = value;
    }

    #[wasm_bindgen(getter = scaleLimit)]
    pub fn scale_limit(&self) -> f32 {
        self.config.scale_limit
    }

    #[wasm_bindgen(setter = scaleLimit)]
    pub fn set_scale_limit(&mut self, value: f32) {
        self.config.scale_limit = value;
    }

    #[wasm_bindgen(getter = proximityRatio)]
    pub fn proximity_ratio(&self) -> f32 {
        self.config.proximity_ratio
    }

    #[wasm_bindgen(setter = proximityRatio)]
    pub fn set_proximity_ratio(&mut self, value: f32) {
        self.config.proximity_ratio = value;
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 {
        self.config.fps
    }

    #[wasm_bindgen(setter)]
    pub fn set_fps(&mut self, value: f32) {
        self.config.fps = value;
    }

    #[wasm_bindgen(getter = tweenDuration)]
    pub fn tween_duration(&self) -> f32 {
        self.config.tween_duration_sec
    }

    #[wasm_bindgen(setter = tweenDuration)]
    pub fn set_tween_duration(&mut self, seconds: f32) {
        self.config.tween_duration_sec = seconds;
    }

    /// Accepts `linear`, `power1.out` or `power2.out`.
    #[wasm_bindgen(js_name = setEase)]
    pub fn set_ease(&mut self, name: &str) -> Result<(), JsValue> {
        let ease = Ease::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown ease '{}'", name)))?;
        self.config.ease = ease;
        Ok(())
    }
}

impl StarscapeOptions {
    pub fn into_config(self) -> StarfieldConfig {
        self.config
    }
}
