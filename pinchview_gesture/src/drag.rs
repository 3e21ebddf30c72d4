// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for the primary pointer: movement deltas, move-sample count,
//! and press time.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragState::start`] on pointer down.
//! 2) On each move, call [`DragState::update`] to get the delta since the last sample.
//! 3) Use [`DragState::move_count`] and [`DragState::elapsed`] to tell taps from drags.
//! 4) End tracking with [`DragState::end`] on pointer up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pinchview_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0), 1_000);
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! assert_eq!(drag.move_count(), 1);
//! assert_eq!(drag.elapsed(1_120), Some(120));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the primary pointer between down and up.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position and time of the pointer down, while a drag is active.
    pub start: Option<(Point, u64)>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    /// Number of move samples seen since the drag started.
    pub moves: u32,
}

impl DragState {
    /// Start tracking a new drag at `pos`, pressed at `time_ms`.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start = Some((pos, time_ms));
        self.last_pos = Some(pos);
        self.moves = 0;
    }

    /// Record a move sample, returning the delta since the previous one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start?;
        self.moves = self.moves.saturating_add(1);
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Move the reference position without counting a sample.
    ///
    /// Used when another pointer lifts and the remaining one takes over, so
    /// the next delta does not jump by the distance between the two.
    pub fn reseed(&mut self, pos: Point) {
        if self.start.is_some() {
            self.last_pos = Some(pos);
        }
    }

    /// Offset from the drag start to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start.map(|(start_pos, _)| current_pos - start_pos)
    }

    /// Milliseconds since the drag started, saturating at zero if `now_ms`
    /// is earlier than the press.
    pub fn elapsed(&self, now_ms: u64) -> Option<u64> {
        self.start.map(|(_, t)| now_ms.saturating_sub(t))
    }

    /// Number of move samples since the drag started.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
