// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Gesture: pointer-stream gesture recognition for pan/zoom views.
//!
//! This crate turns low-level pointer transitions (first pointer down,
//! additional pointer down, move, pointer up) into a small set of intents:
//!
//! - [`Gesture::Pan`]: a viewport-space delta while one pointer drags.
//! - [`Gesture::Zoom`]: an absolute scale while two pointers pinch.
//! - [`Gesture::Tap`] / [`Gesture::DoubleTap`]: short, still presses.
//!
//! The pieces are usable on their own:
//!
//! - [`drag`]: delta, move-count, and press-time tracking for one pointer
//! - [`pinch`]: distance-ratio scaling from a start snapshot
//! - [`tap`]: consecutive-tap counting for double taps
//! - [`recognizer`]: the state machine that combines them
//!
//! The crate does not assume any UI framework. Hosts build [`PointerEvent`]s
//! from their own touch or mouse events, including a monotonic timestamp,
//! and apply the resulting [`Gesture`]s however they like.
//!
//! ## Tap versus drag
//!
//! A press is a tap only if it stays single-pointer, produces fewer than
//! [`GestureConfig::tap_max_moves`] move samples, and is released before
//! [`GestureConfig::tap_timeout_ms`]. Two taps no more than
//! [`GestureConfig::double_tap_timeout_ms`] apart make a double tap.
//!
//! ```rust
//! use kurbo::Point;
//! use pinchview_gesture::{Gesture, GestureRecognizer, PointerEvent};
//!
//! let mut r = GestureRecognizer::default();
//! let at = Point::new(40.0, 40.0);
//!
//! r.on_event(&PointerEvent::primary_down(at, 0), 1.0);
//! assert_eq!(r.on_event(&PointerEvent::primary_up(at, 60), 1.0), Some(Gesture::Tap(at)));
//!
//! r.on_event(&PointerEvent::primary_down(at, 300), 1.0);
//! assert_eq!(r.on_event(&PointerEvent::primary_up(at, 350), 1.0), Some(Gesture::DoubleTap(at)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod pointer;
pub mod recognizer;
pub mod tap;

pub use pointer::{PointerEvent, PointerKind};
pub use recognizer::{Gesture, GestureConfig, GesturePhase, GestureRecognizer};
