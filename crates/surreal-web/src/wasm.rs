#![forbid(unsafe_code)]

//! `wasm-bindgen` surface for the landing page.
//!
//! Compiled only for `wasm32`. Errors cross the boundary as JS strings.

use wasm_bindgen::prelude::*;

use crate::{LandingConfig, LandingError, LandingEvent, LandingSession, duration_from_host_ms};

fn to_js(err: LandingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing landing page controller.
///
/// The page calls `click`/`touchStart`/`touchEnd`/`scroll` from its DOM
/// listeners, `tick` once per animation frame, and reads `snapshot()` to
/// decide what to render.
#[wasm_bindgen]
pub struct SurrealLanding {
    session: LandingSession,
}

#[wasm_bindgen]
impl SurrealLanding {
    /// Mount a session. `config` is an optional JSON [`LandingConfig`].
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<SurrealLanding, JsValue> {
        let config = match config {
            Some(json) => LandingConfig::from_json_str(&json).map_err(to_js)?,
            None => LandingConfig::default(),
        };
        let session = LandingSession::new(&config).map_err(to_js)?;
        Ok(Self { session })
    }

    /// Apply a JSON-encoded [`LandingEvent`].
    pub fn input(&mut self, event: &str) -> Result<bool, JsValue> {
        self.session.handle_event_json(event).map_err(to_js)
    }

    pub fn click(&mut self) -> bool {
        self.session.handle_event(LandingEvent::Click)
    }

    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self, y: f32) {
        self.session.handle_event(LandingEvent::TouchStart { y });
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&mut self, y: f32) -> bool {
        self.session.handle_event(LandingEvent::TouchEnd { y })
    }

    #[wasm_bindgen(js_name = touchCancel)]
    pub fn touch_cancel(&mut self) {
        self.session.handle_event(LandingEvent::TouchCancel);
    }

    pub fn scroll(&mut self, y: f32) -> bool {
        self.session.handle_event(LandingEvent::Scroll { y })
    }

    /// Advance host time by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: f64) {
        self.session.tick(duration_from_host_ms(dt_ms));
    }

    /// Current render state as JSON.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.session
            .snapshot()
            .to_json_string()
            .map_err(|err| to_js(err.into()))
    }

    /// Particle descriptors as JSON.
    #[wasm_bindgen(js_name = particlesJson)]
    pub fn particles_json(&self) -> Result<String, JsValue> {
        self.session.field_json().map_err(to_js)
    }

    /// Inline `style` strings for every particle as JSON.
    #[wasm_bindgen(js_name = particleStyles)]
    pub fn particle_styles(&self) -> Result<String, JsValue> {
        self.session.styles_json().map_err(to_js)
    }
}
