//! 16-bit RGB color type
//!
//! Channels are stored at full 16-bit precision. Display helpers reduce to
//! 8 bits only for swatch rendering.

use std::fmt;

/// Number of distinct values a channel can hold.
pub const NUM_COLOR: u32 = 1 << 16;

/// Largest channel value.
pub const MAX_COLOR: u16 = u16::MAX;

/// A color with three 16-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb16 {
    /// Red channel
    pub r: u16,
    /// Green channel
    pub g: u16,
    /// Blue channel
    pub b: u16,
}

impl Rgb16 {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    ///
    /// Grid axes follow the same order: x is red, y is green, z is blue.
    #[inline]
    pub const fn channels(self) -> [u16; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn from_channels(c: [u16; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Sum of per-channel absolute differences.
    ///
    /// # Example
    /// ```
    /// use lut_grid::Rgb16;
    /// let a = Rgb16::new(10, 20, 30);
    /// let b = Rgb16::new(15, 10, 30);
    /// assert_eq!(a.abs_diff(b), 15);
    /// ```
    #[inline]
    pub fn abs_diff(self, other: Rgb16) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| u32::from(a.abs_diff(b)))
            .sum()
    }

    /// Linear blend towards `other` by `mul / div`, per channel.
    ///
    /// `mul` may exceed `div` for the last cell of an axis whose block size
    /// does not divide the channel range; the result is clamped.
    pub fn interpolate(self, other: Rgb16, mul: u32, div: u32) -> Rgb16 {
        let blend = |a: u16, b: u16| -> u16 {
            let a = i64::from(a);
            let b = i64::from(b);
            let v = a + (b - a) * i64::from(mul) / i64::from(div.max(1));
            v.clamp(0, i64::from(MAX_COLOR)) as u16
        };
        Rgb16::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }

    /// CSS color of the swatch, built from the high byte of each channel.
    ///
    /// # Example
    /// ```
    /// use lut_grid::Rgb16;
    /// assert_eq!(Rgb16::new(0x7300, 0x5200, 0x4400).hex_swatch(), "#735244");
    /// assert_eq!(Rgb16::new(0x0800, 0xffff, 0x00ff).hex_swatch(), "#08ff00");
    /// ```
    pub fn hex_swatch(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r >> 8, self.g >> 8, self.b >> 8)
    }
}

impl From<[u16; 3]> for Rgb16 {
    fn from(c: [u16; 3]) -> Self {
        Self::from_channels(c)
    }
}

impl fmt::Display for Rgb16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb(0x{:04x}, 0x{:04x}, 0x{:04x})", self.r, self.g, self.b)
    }
}
