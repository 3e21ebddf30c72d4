// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview: a headless pinch/pan/zoom controller for image views.
//!
//! [`PinchController`] owns the viewport over one bitmap. It derives a draw
//! transform from raw pointer events, keeps the visible region from drifting
//! off the bitmap with a damped correction, and fades new content in. It
//! never draws; the host applies the [`Frame`] it returns.
//!
//! The host drives it with three calls:
//!
//! 1. [`PinchController::on_size_changed`] whenever the view is laid out.
//! 2. [`PinchController::on_pointer_event`] for every pointer transition,
//!    redrawing when it returns `true`.
//! 3. [`PinchController::tick`] once per rendered frame, scheduling another
//!    frame while [`Frame::redraw`] is set.
//!
//! Requests made before the view has a size, such as
//! [`PinchController::show_around`], are kept and replayed on the first
//! layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinchview::{PinchController, PointerEvent, ViewerConfig, ZoomMode};
//!
//! let config = ViewerConfig::default().with_zoom_mode(ZoomMode::FitShortSide);
//! let mut view = PinchController::with_content(Size::new(100.0, 50.0), config).unwrap();
//! view.on_size_changed(300.0, 200.0).unwrap();
//! assert_eq!(view.scale(), 4.0);
//!
//! // Drag the image to the right, past its left edge.
//! view.on_pointer_event(&PointerEvent::primary_down(Point::new(10.0, 100.0), 0));
//! view.on_pointer_event(&PointerEvent::moved(Point::new(90.0, 100.0), 16));
//! view.on_pointer_event(&PointerEvent::primary_up(Point::new(90.0, 100.0), 400));
//! assert!(view.bounds().x0 < -1.0);
//!
//! // Frames pull it back over a few ticks.
//! let mut frames = 0;
//! while view.tick().redraw {
//!     frames += 1;
//! }
//! assert!(frames > 1);
//! assert!(view.bounds().x0 >= -1.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewerConfig`].
//!
//! Log records go through the `log` facade; install any logger to see them.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod content;
mod controller;

pub use config::{DEFAULT_OVERRUN_DAMPING, ViewerConfig};
pub use content::Content;
pub use controller::{Frame, PinchController};

pub use pinchview_gesture::{Gesture, GestureConfig, GesturePhase, PointerEvent, PointerKind};
pub use pinchview_viewport::{DrawTransform, ViewError, Viewport, ZoomMode};
