use smart_leds::{RGBW, White};

pub type Rgbw = RGBW<u8>;

/// All channels off
pub const OFF: Rgbw = rgbw(0, 0, 0, 0);

/// Full-intensity red, used for the instantaneous level
pub const LEVEL_RED: Rgbw = rgbw(255, 0, 0, 0);

/// Dim white channel, used for the recent peak marker
pub const CEILING_WHITE: Rgbw = rgbw(0, 0, 0, 16);

/// Build an RGBW pixel from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// White channel value of a pixel
pub const fn white(pixel: Rgbw) -> u8 {
    pixel.a.0
}
