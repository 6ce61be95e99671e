//! 8-bit RGB color with a packed RGB565 wire representation.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 16-bit 5-6-5 wire representation.
    pub fn packed565(self) -> u16 {
        ((u16::from(self.r) & 0xF8) << 8) | ((u16::from(self.g) & 0xFC) << 3) | (u16::from(self.b) >> 3)
    }

    /// Scale each channel by `factor`, saturating at channel bounds.
    ///
    /// The factor is clamped to [0, 1]; a factor of 1.0 returns the color
    /// unchanged, 0.0 yields black.
    pub fn scaled(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let scale = |channel: u8| (f64::from(channel) * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}
