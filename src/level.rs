//! Level meter rendering
//!
//! Maps the instantaneous sample and the smoothed peak onto a strip:
//! the first pixels show the current level at full intensity, the pixels
//! up to the peak glow dimly as a ceiling marker, the rest stay dark.

use crate::color::{CEILING_WHITE, LEVEL_RED, OFF, Rgbw};
use crate::sample::DEFAULT_SAMPLE_CEILING;

/// Configuration for the level meter
#[derive(Debug, Clone, Copy)]
pub struct LevelMeterConfig {
    /// Sample value that lights the whole strip
    pub ceiling: u16,
    /// Color of the instantaneous level pixels
    pub level: Rgbw,
    /// Color of the peak marker pixels
    pub marker: Rgbw,
}

impl Default for LevelMeterConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_SAMPLE_CEILING,
            level: LEVEL_RED,
            marker: CEILING_WHITE,
        }
    }
}

/// Pixel counts derived from one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCounts {
    /// Pixels lit for the instantaneous level
    pub instant: usize,
    /// Pixels covered by the peak marker
    pub peak: usize,
}

/// Renders level frames
#[derive(Debug, Clone)]
pub struct LevelRenderer {
    config: LevelMeterConfig,
}

impl LevelRenderer {
    pub const fn new(config: LevelMeterConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &LevelMeterConfig {
        &self.config
    }

    /// Render one frame
    ///
    /// Every pixel of `frame` is overwritten. Pixels below the instant
    /// level win over the peak marker.
    pub fn render(&self, sample: u16, smoothed_max: u16, frame: &mut [Rgbw]) -> LevelCounts {
        let counts = LevelCounts {
            instant: lit_count(sample, self.config.ceiling, frame.len()),
            peak: lit_count(smoothed_max, self.config.ceiling, frame.len()),
        };

        for (i, pixel) in frame.iter_mut().enumerate() {
            *pixel = if i < counts.instant {
                self.config.level
            } else if i < counts.peak {
                self.config.marker
            } else {
                OFF
            };
        }

        counts
    }
}

impl Default for LevelRenderer {
    fn default() -> Self {
        Self::new(LevelMeterConfig::default())
    }
}

/// Number of pixels covered by `value` on a strip of `len` pixels
///
/// `floor(value / ceiling * len)`, clamped to `len`.
#[allow(clippy::cast_possible_truncation)]
pub fn lit_count(value: u16, ceiling: u16, len: usize) -> usize {
    debug_assert!(ceiling > 0, "level ceiling must be non-zero");
    if ceiling == 0 {
        return 0;
    }
    let count = u64::from(value) * len as u64 / u64::from(ceiling);
    count.min(len as u64) as usize
}
