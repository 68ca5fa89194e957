//! Color-checker reference chart
//!
//! The 24 patches of the classic 4×6 calibration chart, in chart order
//! (left to right, top to bottom), as 16-bit sRGB.

use crate::color::Rgb16;
use crate::error::LutError;

/// A named reference patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb16,
}

const fn swatch(name: &'static str, r: u16, g: u16, b: u16) -> Swatch {
    Swatch {
        name,
        color: Rgb16::new(r, g, b),
    }
}

/// Number of patches on the chart.
pub const NUM_SWATCHES: usize = 24;

/// The reference chart.
pub static COLOR_CHECKER: [Swatch; NUM_SWATCHES] = [
    swatch("dark skin", 0x7300, 0x5200, 0x4400),
    swatch("light skin", 0xc200, 0x9600, 0x8200),
    swatch("blue sky", 0x6200, 0x7a00, 0x9d00),
    swatch("foliage", 0x5700, 0x6c00, 0x4300),
    swatch("blue flower", 0x8500, 0x8000, 0xb100),
    swatch("bluish green", 0x6700, 0xbd00, 0xaa00),
    swatch("orange", 0xd600, 0x7e00, 0x2c00),
    swatch("purplish blue", 0x5000, 0x5b00, 0xa600),
    swatch("moderate red", 0xc100, 0x5a00, 0x6300),
    swatch("purple", 0x5e00, 0x3c00, 0x6c00),
    swatch("yellow green", 0x9d00, 0xbc00, 0x4000),
    swatch("orange yellow", 0xe000, 0xa300, 0x2e00),
    swatch("blue", 0x3800, 0x3d00, 0x9600),
    swatch("green", 0x4600, 0x9400, 0x4900),
    swatch("red", 0xaf00, 0x3600, 0x3c00),
    swatch("yellow", 0xe700, 0xc700, 0x1f00),
    swatch("magenta", 0xbb00, 0x5600, 0x9500),
    swatch("cyan", 0x0800, 0x8500, 0xa100),
    swatch("white", 0xf300, 0xf300, 0xf200),
    swatch("neutral 8", 0xc800, 0xc800, 0xc800),
    swatch("neutral 6.5", 0xa000, 0xa000, 0xa000),
    swatch("neutral 5", 0x7a00, 0x7a00, 0x7900),
    swatch("neutral 3.5", 0x5500, 0x5500, 0x5500),
    swatch("black", 0x3400, 0x3400, 0x3400),
];

/// Position of a pixel in a row-major image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelCoord {
    pub x: usize,
    pub y: usize,
}

/// For each chart patch, the pixel closest to it.
///
/// Distance is [`Rgb16::abs_diff`]. Ties keep the first pixel in row-major
/// order.
///
/// # Errors
///
/// - [`LutError::EmptyImage`] if there are no pixels
/// - [`LutError::ImageSizeMismatch`] if `pixels.len() != width * height`,
///   or if `width * height` overflows (reported as `expected: usize::MAX`)
pub fn closest_patches(
    pixels: &[Rgb16],
    width: usize,
    height: usize,
) -> Result<[PixelCoord; NUM_SWATCHES], LutError> {
    let expected = width.checked_mul(height).unwrap_or(usize::MAX);
    if pixels.len() != expected {
        return Err(LutError::ImageSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    if pixels.is_empty() {
        return Err(LutError::EmptyImage);
    }

    let mut closest = [PixelCoord::default(); NUM_SWATCHES];
    let mut best = [u32::MAX; NUM_SWATCHES];

    for (i, &pixel) in pixels.iter().enumerate() {
        for (cc, swatch) in COLOR_CHECKER.iter().enumerate() {
            let diff = pixel.abs_diff(swatch.color);
            if diff < best[cc] {
                best[cc] = diff;
                closest[cc] = PixelCoord {
                    x: i % width,
                    y: i / width,
                };
            }
        }
    }

    Ok(closest)
}
