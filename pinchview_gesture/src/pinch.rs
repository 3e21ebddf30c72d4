// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking.
//!
//! The scale is recomputed from the snapshot taken at pinch start on every
//! sample rather than accumulated, so intermediate samples leave no rounding
//! residue.

use kurbo::Point;

/// Snapshot taken when the second pointer goes down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    /// Distance between the two pointers at pinch start.
    pub start_distance: f64,
    /// Viewport scale at pinch start.
    pub start_scale: f64,
    /// Start distances below this are degenerate.
    pub min_distance: f64,
}

impl PinchState {
    /// Begins a pinch between `first` and `second` at the current `scale`.
    #[must_use]
    pub fn begin(first: Point, second: Point, scale: f64, min_distance: f64) -> Self {
        Self {
            start_distance: first.distance(second),
            start_scale: scale,
            min_distance,
        }
    }

    /// Returns `true` if the start distance is too small to divide by.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.start_distance >= self.min_distance && self.start_distance > 0.0)
    }

    /// Scale for the current pointer pair: `start_scale * d / start_distance`.
    ///
    /// Returns `None` when the pinch is degenerate or the result is not a
    /// finite positive number.
    #[must_use]
    pub fn scale_at(&self, first: Point, second: Point) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let scale = self.start_scale * (first.distance(second) / self.start_distance);
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }
}
