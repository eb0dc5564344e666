#![forbid(unsafe_code)]

//! Scroll state for the navigation bar.
//!
//! The bar switches to its opaque, blurred look once the page has scrolled
//! past a small threshold and back to transparent when it returns.

use crate::error::{ConfigError, check_threshold};

/// Scroll offset, in pixels, past which the page counts as scrolled.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 50.0;

/// Configuration for [`ScrollWatcher`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    threshold_px: f32,
}

impl ScrollConfig {
    /// Rejects negative and non-finite thresholds.
    pub fn new(threshold_px: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            threshold_px: check_threshold("scroll_threshold_px", threshold_px)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn threshold_px(&self) -> f32 {
        self.threshold_px
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

/// Tracks whether the page is scrolled past the threshold.
#[derive(Debug, Clone, Default)]
pub struct ScrollWatcher {
    config: ScrollConfig,
    offset_y: f32,
    scrolled: bool,
}

impl ScrollWatcher {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            offset_y: 0.0,
            scrolled: false,
        }
    }

    /// Record a new vertical scroll offset and return the scrolled flag.
    ///
    /// The comparison is strict; NaN counts as not scrolled.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        self.offset_y = offset_y;
        self.scrolled = offset_y > self.config.threshold_px;
        self.scrolled
    }

    #[inline]
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Last recorded offset.
    #[inline]
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut w = ScrollWatcher::default();
        assert!(!w.is_scrolled());
        assert!(!w.on_scroll(50.0));
        assert!(w.on_scroll(51.0));
    }

    #[test]
    fn toggles_back() {
        let mut w = ScrollWatcher::default();
        w.on_scroll(300.0);
        assert!(w.is_scrolled());
        w.on_scroll(0.0);
        assert!(!w.is_scrolled());
        assert_eq!(w.offset_y(), 0.0);
    }

    #[test]
    fn nan_is_not_scrolled() {
        let mut w = ScrollWatcher::default();
        w.on_scroll(300.0);
        assert!(!w.on_scroll(f32::NAN));
    }

    #[test]
    fn config_validation() {
        assert!(ScrollConfig::new(-5.0).is_err());
        assert_eq!(ScrollConfig::new(0.0).unwrap().threshold_px(), 0.0);
    }
}
