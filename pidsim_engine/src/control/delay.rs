//! Actuation delay line.
//!
//! Fixed-length FIFO between controller and plant. A value pushed at tick
//! `t` is returned by the push at tick `t + len`; until then the zero fill
//! drains out. A zero-length line passes values straight through.

use std::collections::VecDeque;

/// Ring buffer holding exactly `len` pending control values between ticks.
#[derive(Debug, Clone)]
pub struct DelayLine {
    queue: VecDeque<f64>,
    len: usize,
}

impl DelayLine {
    /// Create a zero-filled delay line of `len` ticks.
    pub fn new(len: usize) -> Self {
        // One spare slot: push happens before pop.
        let mut queue = VecDeque::with_capacity(len + 1);
        queue.resize(len, 0.0);
        Self { queue, len }
    }

    /// Refill with zeros.
    #[inline]
    pub fn reset(&mut self) {
        self.queue.clear();
        self.queue.resize(self.len, 0.0);
    }

    /// Append `value` at the tail, remove and return the head.
    #[inline]
    pub fn push_pop(&mut self, value: f64) -> f64 {
        self.queue.push_back(value);
        // Non-empty: we just pushed.
        self.queue.pop_front().unwrap_or(value)
    }

    /// Configured delay [ticks].
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pending values, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = f64> + '_ {
        self.queue.iter().copied()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
