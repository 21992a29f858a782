//! Rolling peak smoother
//!
//! Short-term noise is folded into a window peak; every
//! `flush_threshold + 1` samples the peak is committed into a long
//! history whose maximum drives the peak marker on the strip.

use crate::history::History;

/// Samples accumulated before the window peak is committed
pub const DEFAULT_FLUSH_THRESHOLD: u8 = 6;

/// Number of committed peaks kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 512;

/// Running peak since the last flush
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleWindow {
    pub current_max: u16,
    /// Wider than the threshold so it can always pass it
    pub count: u16,
}

/// Rolling-maximum smoother
///
/// N is the history capacity
#[derive(Debug)]
pub struct RollingSmoother<const N: usize = DEFAULT_HISTORY_CAPACITY> {
    window: SampleWindow,
    flush_threshold: u8,
    history: History<u16, N>,
}

impl<const N: usize> RollingSmoother<N> {
    pub const fn new(flush_threshold: u8) -> Self {
        Self {
            window: SampleWindow {
                current_max: 0,
                count: 0,
            },
            flush_threshold,
            history: History::new(),
        }
    }

    /// Feed one bounded sample
    ///
    /// Returns the committed peak when this sample closed the window
    pub fn feed(&mut self, sample: u16) -> Option<u16> {
        self.window.current_max = self.window.current_max.max(sample);
        self.window.count += 1;

        if self.window.count <= u16::from(self.flush_threshold) {
            return None;
        }

        let peak = self.window.current_max;
        self.history.push(peak);
        self.window = SampleWindow::default();
        Some(peak)
    }

    /// Maximum of the committed peaks, or 0 before the first flush
    pub fn smoothed_max(&self) -> u16 {
        self.history.max().unwrap_or(0)
    }

    pub const fn window(&self) -> SampleWindow {
        self.window
    }

    pub const fn history(&self) -> &History<u16, N> {
        &self.history
    }
}

impl<const N: usize> Default for RollingSmoother<N> {
    fn default() -> Self {
        Self::new(DEFAULT_FLUSH_THRESHOLD)
    }
}
