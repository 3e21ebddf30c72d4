// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::ViewError;

/// How content is initially scaled into the viewport.
///
/// Each variant is a pure function of the viewport size and the content size;
/// see [`ZoomMode::scale_for`]. The variants form an ordered cycle that
/// [`ZoomMode::cycled`] walks in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ZoomMode {
    /// Fit the whole content inside the viewport, letterboxing as needed.
    FitWindow,
    /// Cover the viewport by fitting the content's shorter side, cropping the
    /// longer one.
    #[default]
    FitShortSide,
    /// Show content at 1:1.
    NoZoom,
}

impl ZoomMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 3] = [Self::FitWindow, Self::FitShortSide, Self::NoZoom];

    /// Returns the scale that maps `content` into `view` under this mode.
    ///
    /// Returns [`ViewError::DegenerateGeometry`] when either size has a zero
    /// or non-finite extent, since no positive scale exists in that case.
    pub fn scale_for(self, view: Size, content: Size) -> Result<f64, ViewError> {
        if !is_positive(view) || !is_positive(content) {
            return Err(ViewError::DegenerateGeometry);
        }
        let sx = view.width / content.width;
        let sy = view.height / content.height;
        Ok(match self {
            Self::FitWindow => sx.min(sy),
            Self::FitShortSide => sx.max(sy),
            Self::NoZoom => 1.0,
        })
    }

    /// Position of this mode within [`ZoomMode::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::FitWindow => 0,
            Self::FitShortSide => 1,
            Self::NoZoom => 2,
        }
    }

    /// Returns the mode `offset` steps away in cycle order, wrapping in both
    /// directions.
    #[must_use]
    pub fn cycled(self, offset: i32) -> Self {
        let count = Self::ALL.len() as i64;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rem_euclid by the variant count keeps the index in 0..3"
        )]
        let index = (self.index() as i64 + i64::from(offset)).rem_euclid(count) as usize;
        Self::ALL[index]
    }
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
