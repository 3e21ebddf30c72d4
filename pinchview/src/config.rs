// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use pinchview_gesture::GestureConfig;
use pinchview_viewport::{DEFAULT_SHOW_AROUND_MARGIN, ViewError, ZoomMode};

/// Default divisor for damped overrun correction.
///
/// A full-viewport overrun closes in a handful of redraw ticks.
pub const DEFAULT_OVERRUN_DAMPING: f64 = 6.0;

/// Options recognized by [`PinchController`](crate::PinchController).
///
/// ```rust
/// use pinchview::{ViewerConfig, ZoomMode};
///
/// let config = ViewerConfig::default()
///     .with_zoom_mode(ZoomMode::FitWindow)
///     .with_fade_in_rate(32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Initial zoom mode.
    pub zoom_mode: ZoomMode,
    /// Divisor applied to overrun gaps per tick. Must be at least `1.0`.
    pub overrun_damping: f64,
    /// Alpha added per tick while fading in. `255` disables the fade.
    pub fade_in_rate: u8,
    /// Ratio between a show-around target and the region framed for it.
    pub show_around_margin: f64,
    /// Tap, double-tap, and pinch thresholds.
    pub gesture: GestureConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_mode: ZoomMode::FitShortSide,
            overrun_damping: DEFAULT_OVERRUN_DAMPING,
            fade_in_rate: u8::MAX,
            show_around_margin: DEFAULT_SHOW_AROUND_MARGIN,
            gesture: GestureConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Sets [`ViewerConfig::zoom_mode`].
    #[must_use]
    pub fn with_zoom_mode(mut self, mode: ZoomMode) -> Self {
        self.zoom_mode = mode;
        self
    }

    /// Sets [`ViewerConfig::overrun_damping`].
    #[must_use]
    pub fn with_overrun_damping(mut self, damping: f64) -> Self {
        self.overrun_damping = damping;
        self
    }

    /// Sets [`ViewerConfig::fade_in_rate`].
    #[must_use]
    pub fn with_fade_in_rate(mut self, rate: u8) -> Self {
        self.fade_in_rate = rate;
        self
    }

    /// Sets [`ViewerConfig::show_around_margin`].
    #[must_use]
    pub fn with_show_around_margin(mut self, margin: f64) -> Self {
        self.show_around_margin = margin;
        self
    }

    /// Sets [`ViewerConfig::gesture`].
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Checks that numeric options are in range.
    pub fn validate(&self) -> Result<(), ViewError> {
        validate_damping(self.overrun_damping)?;
        validate_margin(self.show_around_margin)?;
        if !self.gesture.min_pinch_distance.is_finite() || self.gesture.min_pinch_distance < 0.0 {
            return Err(ViewError::InvalidArgument("minimum pinch distance"));
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<(), ViewError> {
    if damping.is_finite() && damping >= 1.0 {
        Ok(())
    } else {
        Err(ViewError::InvalidArgument("overrun damping"))
    }
}

pub(crate) fn validate_margin(margin: f64) -> Result<(), ViewError> {
    if margin.is_finite() && margin > 0.0 {
        Ok(())
    } else {
        Err(ViewError::InvalidArgument("show-around margin"))
    }
}
