// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by viewport and controller operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// A required value was empty or out of range. The payload names it.
    InvalidArgument(&'static str),
    /// The operation would need a zero-sized extent or a zero-length
    /// distance, so no finite positive scale exists.
    DegenerateGeometry,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::DegenerateGeometry => f.write_str("degenerate geometry: no finite positive scale"),
        }
    }
}

impl core::error::Error for ViewError {}
