// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer: turns a raw pointer stream into pan, zoom, tap, and
//! double-tap intents.
//!
//! ## Phases
//!
//! ```text
//! Idle --primary down--> Pressed --move--> Panning
//! Pressed/Panning --second pointer down--> Pinching
//! Pinching --second pointer up--> Panning
//! Pressed/Panning/Pinching --first pointer up, others held--> PointerUpPending
//! any --last pointer up--> Idle
//! ```
//!
//! Once `PointerUpPending` is reached nothing moves the view until every
//! pointer is up and a new gesture starts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pinchview_gesture::{Gesture, GestureRecognizer, PointerEvent};
//!
//! let mut recognizer = GestureRecognizer::default();
//! let scale = 1.0;
//!
//! recognizer.on_event(&PointerEvent::primary_down(Point::new(10.0, 10.0), 0), scale);
//! let pan = recognizer.on_event(&PointerEvent::moved(Point::new(14.0, 7.0), 16), scale);
//! assert_eq!(pan, Some(Gesture::Pan(Vec2::new(4.0, -3.0))));
//! ```

use kurbo::{Point, Vec2};

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::pointer::{PointerEvent, PointerKind};
use crate::tap::{TapCounter, TapKind};

/// Timing and distance thresholds for gesture classification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// A press with this many move samples or more is a drag, not a tap.
    pub tap_max_moves: u32,
    /// A press held this long or longer is not a tap.
    pub tap_timeout_ms: u64,
    /// Two taps at most this far apart form a double tap.
    pub double_tap_timeout_ms: u64,
    /// Pinch start distances below this many pixels are degenerate.
    pub min_pinch_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_max_moves: 3,
            tap_timeout_ms: 250,
            double_tap_timeout_ms: 400,
            min_pinch_distance: 1.0,
        }
    }
}

/// Where the recognizer is within the current gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// The primary pointer is down and has not moved yet.
    Pressed,
    /// The primary pointer is dragging.
    Panning,
    /// Two pointers are down and scaling.
    Pinching,
    /// The primary pointer lifted while another is still held.
    PointerUpPending,
}

/// An intent produced by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Move content by a viewport-space pixel delta.
    Pan(Vec2),
    /// Set the viewport scale.
    Zoom {
        /// Absolute scale, derived from the pinch start.
        scale: f64,
    },
    /// A single tap at a viewport position.
    Tap(Point),
    /// The second of two quick taps at a viewport position.
    DoubleTap(Point),
}

/// Pointer-stream state machine.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    phase: GesturePhase,
    drag: DragState,
    pinch: Option<PinchState>,
    taps: TapCounter,
    multi_touch: bool,
    last_point: Point,
}

impl GestureRecognizer {
    /// Creates an idle recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds. Takes effect from the next event.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while any pointer is down.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Last position of the primary pointer outside a pinch.
    #[must_use]
    pub fn last_point(&self) -> Point {
        self.last_point
    }

    /// Returns the active pinch snapshot, if any.
    #[must_use]
    pub fn pinch(&self) -> Option<&PinchState> {
        self.pinch.as_ref()
    }

    /// Feeds one pointer event.
    ///
    /// `scale` is the viewport's current scale; it seeds the pinch snapshot
    /// when a second pointer goes down.
    pub fn on_event(&mut self, event: &PointerEvent, scale: f64) -> Option<Gesture> {
        match event.kind {
            PointerKind::PrimaryDown => {
                self.drag.start(event.primary, event.time_ms);
                self.pinch = None;
                self.multi_touch = false;
                self.last_point = event.primary;
                self.phase = GesturePhase::Pressed;
                None
            }
            PointerKind::SecondaryDown => {
                self.multi_touch = true;
                if event.index != 1
                    || !matches!(self.phase, GesturePhase::Pressed | GesturePhase::Panning)
                {
                    return None;
                }
                let second = event.secondary?;
                let pinch = PinchState::begin(
                    event.primary,
                    second,
                    scale,
                    self.config.min_pinch_distance,
                );
                if pinch.is_degenerate() {
                    log::debug!(
                        "pinch started with pointers {:.2}px apart; scaling disabled",
                        pinch.start_distance
                    );
                } else {
                    log::debug!(
                        "pinch started at distance {:.2}, scale {scale}",
                        pinch.start_distance
                    );
                }
                self.pinch = Some(pinch);
                self.phase = GesturePhase::Pinching;
                None
            }
            PointerKind::Move => match self.phase {
                GesturePhase::Pressed | GesturePhase::Panning => {
                    self.phase = GesturePhase::Panning;
                    self.last_point = event.primary;
                    self.drag.update(event.primary).map(Gesture::Pan)
                }
                GesturePhase::Pinching => {
                    let second = event.secondary?;
                    let scale = self.pinch?.scale_at(event.primary, second)?;
                    Some(Gesture::Zoom { scale })
                }
                GesturePhase::Idle | GesturePhase::PointerUpPending => None,
            },
            PointerKind::SecondaryUp => {
                match (event.index, self.phase) {
                    (_, GesturePhase::Idle | GesturePhase::PointerUpPending) => {}
                    (0, _) => {
                        if self.pinch.take().is_some() {
                            log::debug!("pinch ended: primary pointer lifted first");
                        }
                        self.phase = GesturePhase::PointerUpPending;
                    }
                    (1, GesturePhase::Pinching) => {
                        self.pinch = None;
                        self.drag.reseed(event.primary);
                        self.last_point = event.primary;
                        self.phase = GesturePhase::Panning;
                        log::debug!("pinch ended: second pointer lifted");
                    }
                    _ => {}
                }
                None
            }
            PointerKind::PrimaryUp => {
                let was = self.phase;
                let is_tap = matches!(was, GesturePhase::Pressed | GesturePhase::Panning)
                    && !self.multi_touch
                    && self.drag.move_count() < self.config.tap_max_moves
                    && self
                        .drag
                        .elapsed(event.time_ms)
                        .is_some_and(|held| held < self.config.tap_timeout_ms);
                self.drag.end();
                self.pinch = None;
                self.phase = GesturePhase::Idle;
                if !is_tap {
                    // A drag or pinch breaks any tap sequence in progress.
                    self.taps.reset();
                    return None;
                }
                let pos = event.primary;
                match self
                    .taps
                    .register(event.time_ms, self.config.double_tap_timeout_ms)
                {
                    TapKind::Single => {
                        log::debug!("tap at ({:.1}, {:.1})", pos.x, pos.y);
                        Some(Gesture::Tap(pos))
                    }
                    TapKind::Double => {
                        log::debug!("double tap at ({:.1}, {:.1})", pos.x, pos.y);
                        Some(Gesture::DoubleTap(pos))
                    }
                }
            }
        }
    }
}
