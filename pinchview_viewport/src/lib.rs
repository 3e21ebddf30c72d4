// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Viewport: geometry for a pan/zoom view over a fixed-size image.
//!
//! This crate provides a small, headless model of a viewport looking at a
//! bitmap. It focuses on:
//! - Zoom-mode policies that pick an initial scale ([`ZoomMode`]).
//! - Deriving the visible content rectangle from scale, translation, and a
//!   fixed zoom center ([`Viewport::bounds`]).
//! - Pulling the view back over the content with a damped, per-axis
//!   correction that runs once per redraw ([`Viewport::correct_overrun`]).
//! - Framing a region of interest, deferred until the viewport has a size
//!   ([`Viewport::show_around`]).
//!
//! It does **not** draw anything or interpret pointer input. The draw-time
//! transform is exposed as [`DrawTransform`] for the host to apply.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use pinchview_viewport::{Viewport, ZoomMode};
//!
//! let mut vp = Viewport::new();
//! vp.set_content_size(Size::new(100.0, 50.0)).unwrap();
//! vp.set_view_size(Size::new(300.0, 200.0)).unwrap();
//! vp.apply_zoom_mode(ZoomMode::FitShortSide).unwrap();
//! assert_eq!(vp.scale(), 4.0);
//!
//! // Content covers the view; the horizontal excess is cropped.
//! let visible = vp.bounds();
//! assert_eq!(visible.width(), 75.0);
//! assert_eq!(visible.height(), 50.0);
//! ```
//!
//! ## Coordinate spaces
//!
//! - *Content space* is the bitmap's own pixel grid.
//! - *View space* is the display area in device pixels.
//!
//! The draw transform scales about the zoom center and then translates in
//! content space. [`Viewport::bounds`] is its exact inverse.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod viewport;
mod zoom_mode;

pub use error::ViewError;
pub use viewport::{
    DEFAULT_SHOW_AROUND_MARGIN, DrawTransform, FitOutcome, OVERRUN_TOLERANCE,
    PLACEHOLDER_CONTENT_SIZE, SCALE_RECOVERY_STEP, Viewport,
};
pub use zoom_mode::ZoomMode;
