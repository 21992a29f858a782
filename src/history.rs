//! Fixed-capacity history of values.
//!
//! A circular buffer backed by `heapless::Deque`. Once full, every push
//! evicts the oldest entry.

use heapless::Deque;

/// Fixed-capacity circular buffer
///
/// N is the number of values kept
#[derive(Debug)]
pub struct History<T, const N: usize> {
    inner: Deque<T, N>,
}

impl<T: Copy + Ord, const N: usize> History<T, N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "history capacity must be non-zero") };
        Self {
            inner: Deque::new(),
        }
    }

    /// Push a value, evicting the oldest one when the buffer is full
    ///
    /// Returns the evicted value, if any
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.inner.is_full() {
            self.inner.pop_front()
        } else {
            None
        };
        // A slot is free here, capacity is checked in `new`
        let _ = self.inner.push_back(value);
        evicted
    }

    /// Largest value currently held
    ///
    /// Returns None if the history is empty
    pub fn max(&self) -> Option<T> {
        self.inner.iter().copied().max()
    }

    /// Most recently pushed value
    pub fn latest(&self) -> Option<T> {
        self.inner.back().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: Copy + Ord, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
