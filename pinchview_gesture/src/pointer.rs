// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer events.
//!
//! Hosts translate their platform touch/mouse events into [`PointerEvent`]s.
//! Positions are in viewport pixels; times are milliseconds from a monotonic
//! clock chosen by the host.

use kurbo::Point;

/// Transition carried by a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// The first pointer of a gesture went down.
    PrimaryDown,
    /// An additional pointer went down while others are held.
    ///
    /// [`PointerEvent::index`] is the index of the new pointer.
    SecondaryDown,
    /// One or more held pointers moved.
    Move,
    /// A pointer was released while at least one other remains down.
    ///
    /// [`PointerEvent::index`] is the index of the released pointer; index
    /// `0` means the pointer that started the gesture was lifted first.
    SecondaryUp,
    /// The last held pointer was released.
    PrimaryUp,
}

/// A single pointer transition with the positions of the first two pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Index of the pointer the transition refers to.
    pub index: usize,
    /// Position of pointer `0`.
    pub primary: Point,
    /// Position of pointer `1`, when one is down.
    pub secondary: Option<Point>,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// First pointer down at `pos`.
    #[must_use]
    pub fn primary_down(pos: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::PrimaryDown,
            index: 0,
            primary: pos,
            secondary: None,
            time_ms,
        }
    }

    /// Second pointer down at `second` while the first is held at `first`.
    #[must_use]
    pub fn secondary_down(first: Point, second: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::SecondaryDown,
            index: 1,
            primary: first,
            secondary: Some(second),
            time_ms,
        }
    }

    /// Single pointer moved to `pos`.
    #[must_use]
    pub fn moved(pos: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            index: 0,
            primary: pos,
            secondary: None,
            time_ms,
        }
    }

    /// Two held pointers moved to `first` and `second`.
    #[must_use]
    pub fn moved_pair(first: Point, second: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            index: 0,
            primary: first,
            secondary: Some(second),
            time_ms,
        }
    }

    /// Pointer `index` was released while another stays down.
    #[must_use]
    pub fn secondary_up(index: usize, first: Point, second: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::SecondaryUp,
            index,
            primary: first,
            secondary: Some(second),
            time_ms,
        }
    }

    /// Last pointer released at `pos`.
    #[must_use]
    pub fn primary_up(pos: Point, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::PrimaryUp,
            index: 0,
            primary: pos,
            secondary: None,
            time_ms,
        }
    }
}
