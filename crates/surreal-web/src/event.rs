#![forbid(unsafe_code)]

//! JSON-friendly input schema for the landing page.
//!
//! The host translates DOM events before pushing them:
//! - `click` on the intro layer -> [`LandingEvent::Click`]
//! - `touchstart` / `touchend` -> `TouchStart` / `TouchEnd` with the first
//!   touch's `clientY` (`changedTouches` for the end event)
//! - `touchcancel` -> `TouchCancel`
//! - `scroll` on the window -> `Scroll` with `window.scrollY`
//!
//! Encoded form uses a `kind` tag:
//!
//! ```text
//! {"kind":"click"}
//! {"kind":"touch_start","y":500.0}
//! {"kind":"scroll","y":120.0}
//! ```

use serde::{Deserialize, Serialize};

/// One host input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LandingEvent {
    Click,
    TouchStart { y: f32 },
    TouchEnd { y: f32 },
    TouchCancel,
    Scroll { y: f32 },
}

impl LandingEvent {
    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode an event JSON string.
    ///
    /// Errors occur if the JSON does not match the expected schema.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
