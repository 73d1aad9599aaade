use image::RgbImage;
use rayon::prelude::*;

use crate::escape_image::EscapeImage;

/// Per-channel weights applied to a normalized escape count.
///
/// A count of `n` out of `max_iterations` becomes the intensity
/// `255 · n / max_iterations`; each channel is that intensity times its
/// weight, saturating at 255. Bounded pixels therefore take the full tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Tint {
    /// Blue-leaning tint, bright where orbits stay bounded.
    pub const OCEAN: Self = Self {
        r: 0.4,
        g: 0.7,
        b: 1.0,
    };

    pub const GRAYSCALE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Map one escape count to an RGB triple.
    #[inline]
    pub fn color(&self, count: u32, max_iterations: u32) -> [u8; 3] {
        let intensity = if max_iterations == 0 {
            0.0
        } else {
            255.0 * count.min(max_iterations) as f64 / max_iterations as f64
        };
        // `as u8` saturates and maps NaN to 0.
        [
            (self.r * intensity) as u8,
            (self.g * intensity) as u8,
            (self.b * intensity) as u8,
        ]
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::OCEAN
    }
}

/// Colorize an escape-count image into an RGB buffer.
pub fn colorize(image: &EscapeImage, tint: Tint) -> RgbImage {
    let mut out = RgbImage::new(image.width, image.height);
    let max = image.max_iterations;
    out.par_chunks_mut(3)
        .zip(image.as_slice().par_iter())
        .for_each(|(pixel, &count)| {
            pixel.copy_from_slice(&tint.color(count, max));
        });
    out
}
