use crate::complex::Complex;
use crate::error::{Argument, CoreError};

/// Maps pixel coordinates onto the complex plane.
///
/// The viewport is centred on `center`, with `units_per_pixel` defining how
/// many complex-plane units each pixel spans. Pixels are sampled at their
/// centres, so row `r` and row `height - 1 - r` land on conjugate points when
/// `center.im == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Centre of the viewport in the complex plane.
    pub center: Complex,

    /// Complex-plane units per pixel (the reciprocal of zoom).
    pub units_per_pixel: f64,

    /// Viewport width in pixels.
    pub width: u32,

    /// Viewport height in pixels.
    pub height: u32,
}

impl Viewport {
    /// A viewport centred on the origin where `zoom` pixels span one unit.
    pub fn from_zoom(width: u32, height: u32, zoom: f64) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::invalid(
                Argument::Zoom,
                format!("must be positive and finite, got {zoom}"),
            ));
        }
        Self::new(Complex::ZERO, 1.0 / zoom, width, height)
    }

    /// A viewport centred on the origin whose shorter side spans `extent`
    /// complex units. The longer side grows with the aspect ratio so pixels
    /// stay square.
    pub fn fit_extent(width: u32, height: u32, extent: f64) -> crate::Result<Self> {
        if extent <= 0.0 || !extent.is_finite() {
            return Err(CoreError::invalid(
                Argument::Extent,
                format!("must be positive and finite, got {extent}"),
            ));
        }
        check_dimensions(width, height)?;
        Self::new(Complex::ZERO, extent / width.min(height) as f64, width, height)
    }

    /// Create a viewport with explicit parameters.
    pub fn new(
        center: Complex,
        units_per_pixel: f64,
        width: u32,
        height: u32,
    ) -> crate::Result<Self> {
        check_dimensions(width, height)?;
        if units_per_pixel <= 0.0 || !units_per_pixel.is_finite() {
            return Err(CoreError::invalid(
                Argument::Zoom,
                format!("pixel spacing must be positive and finite, got {units_per_pixel}"),
            ));
        }
        if !center.is_finite() {
            return Err(CoreError::invalid(
                Argument::Center,
                format!("must be finite, got {center}"),
            ));
        }
        Ok(Self {
            center,
            units_per_pixel,
            width,
            height,
        })
    }

    /// Return a copy centred on a different point.
    pub fn with_center(self, center: Complex) -> Self {
        Self { center, ..self }
    }

    /// Map a pixel to its starting value `z₀`.
    ///
    /// `(0, 0)` is the top-left pixel; increasing `row` moves toward
    /// positive imaginary values.
    #[inline]
    pub fn pixel_to_complex(&self, col: u32, row: u32) -> Complex {
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        Complex::new(
            self.center.re + ((col as f64 + 0.5) - half_w) * self.units_per_pixel,
            self.center.im + ((row as f64 + 0.5) - half_h) * self.units_per_pixel,
        )
    }

    /// Pixels per complex unit.
    pub fn zoom(&self) -> f64 {
        1.0 / self.units_per_pixel
    }

    /// `true` when rows mirror each other across the real axis.
    pub fn is_centered_on_real_axis(&self) -> bool {
        self.center.im == 0.0
    }

    /// The total extent of the viewport in complex-plane units.
    pub fn complex_width(&self) -> f64 {
        self.width as f64 * self.units_per_pixel
    }

    /// The total extent of the viewport in complex-plane units.
    pub fn complex_height(&self) -> f64 {
        self.height as f64 * self.units_per_pixel
    }
}

fn check_dimensions(width: u32, height: u32) -> crate::Result<()> {
    if width == 0 {
        return Err(CoreError::invalid(Argument::Width, "must be > 0"));
    }
    if height == 0 {
        return Err(CoreError::invalid(Argument::Height, "must be > 0"));
    }
    Ok(())
}
