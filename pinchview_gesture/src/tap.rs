// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consecutive-tap counting for double-tap recognition.

/// Classification of a completed tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    /// A tap with no partner inside the timeout window.
    Single,
    /// The second of two taps inside the timeout window.
    Double,
}

/// Counts taps that follow each other within a timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapCounter {
    last_tap_ms: Option<u64>,
    count: u32,
}

impl TapCounter {
    /// Registers a tap at `time_ms`.
    ///
    /// A tap within `timeout_ms` of the previous one increments the counter;
    /// otherwise the counter restarts at one. Reaching two yields
    /// [`TapKind::Double`] and clears the counter.
    pub fn register(&mut self, time_ms: u64, timeout_ms: u64) -> TapKind {
        let within = self
            .last_tap_ms
            .is_some_and(|last| time_ms.saturating_sub(last) <= timeout_ms);
        self.count = if within { self.count + 1 } else { 1 };
        self.last_tap_ms = Some(time_ms);
        if self.count == 2 {
            self.count = 0;
            TapKind::Double
        } else {
            TapKind::Single
        }
    }

    /// Number of taps counted toward the next double tap.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Forgets all previous taps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{TapCounter, TapKind};

    #[test]
    fn two_quick_taps_make_a_double() {
        let mut taps = TapCounter::default();
        assert_eq!(taps.register(1_000, 400), TapKind::Single);
        assert_eq!(taps.register(1_300, 400), TapKind::Double);
        assert_eq!(taps.count(), 0);
    }

    #[test]
    fn slow_taps_stay_single() {
        let mut taps = TapCounter::default();
        assert_eq!(taps.register(1_000, 400), TapKind::Single);
        assert_eq!(taps.register(1_500, 400), TapKind::Single);
        assert_eq!(taps.count(), 1);
    }

    #[test]
    fn third_quick_tap_starts_over() {
        let mut taps = TapCounter::default();
        taps.register(0, 400);
        assert_eq!(taps.register(100, 400), TapKind::Double);
        assert_eq!(taps.register(200, 400), TapKind::Single);
        assert_eq!(taps.register(300, 400), TapKind::Double);
    }

    #[test]
    fn reset_forgets_pending_tap() {
        let mut taps = TapCounter::default();
        taps.register(0, 400);
        taps.reset();
        assert_eq!(taps.register(100, 400), TapKind::Single);
    }
}
