/// Default right shift applied to a raw conversion result
pub const DEFAULT_SAMPLE_SHIFT: u8 = 4;

/// Default saturation ceiling of a sample
pub const DEFAULT_SAMPLE_CEILING: u16 = 1024;

/// Conversion from a raw ADC result to a bounded sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleScale {
    /// Right shift applied to the raw, left-aligned conversion result
    pub shift: u8,
    /// Largest sample value; anything above is clamped to it
    pub ceiling: u16,
}

impl SampleScale {
    /// Scale a raw conversion result into `[0, ceiling]`
    ///
    /// Saturated readings are clamped silently.
    pub const fn apply(self, raw: u16) -> u16 {
        let shifted = match raw.checked_shr(self.shift as u32) {
            Some(value) => value,
            None => 0,
        };
        if shifted > self.ceiling {
            self.ceiling
        } else {
            shifted
        }
    }
}

impl Default for SampleScale {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SAMPLE_SHIFT,
            ceiling: DEFAULT_SAMPLE_CEILING,
        }
    }
}
