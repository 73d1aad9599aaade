use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::Complex;
use crate::julia::Julia;
use crate::params::{default_escape_radius, EscapeParams};
use crate::viewport::Viewport;

/// How pixel space is scaled onto the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Scale {
    /// `zoom` pixels per complex unit.
    Zoom { zoom: f64 },
    /// The shorter image side spans `extent` complex units.
    Extent { extent: f64 },
}

/// A complete description of one generation call.
///
/// Deserialized requests are unchecked; [`build`](Self::build) validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub width: u32,
    pub height: u32,
    pub c: Complex,
    pub max_iterations: u32,
    pub scale: Scale,
    #[serde(default = "default_escape_radius")]
    pub escape_radius: f64,
    #[serde(default)]
    pub periodicity_check: bool,
    #[serde(default = "default_center")]
    pub center: Complex,
}

fn default_center() -> Complex {
    Complex::ZERO
}

impl GenerateRequest {
    /// A request using the conventional radius and an origin-centred zoom mapping.
    pub fn with_zoom(width: u32, height: u32, zoom: f64, c: Complex, max_iterations: u32) -> Self {
        Self {
            width,
            height,
            c,
            max_iterations,
            scale: Scale::Zoom { zoom },
            escape_radius: EscapeParams::DEFAULT_ESCAPE_RADIUS,
            periodicity_check: false,
            center: Complex::ZERO,
        }
    }

    /// Validate the request and split it into the fractal and its mapping.
    pub fn build(&self) -> crate::Result<(Julia, Viewport)> {
        let params = EscapeParams::new(self.max_iterations, self.escape_radius)?
            .with_periodicity_check(self.periodicity_check);
        let julia = Julia::new(self.c, params)?;
        let viewport = match self.scale {
            Scale::Zoom { zoom } => Viewport::from_zoom(self.width, self.height, zoom)?,
            Scale::Extent { extent } => Viewport::fit_extent(self.width, self.height, extent)?,
        };
        let viewport = Viewport::new(
            self.center,
            viewport.units_per_pixel,
            viewport.width,
            viewport.height,
        )?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            zoom = viewport.zoom(),
            c = %julia.c(),
            max_iterations = self.max_iterations,
            "Validated generate request"
        );
        Ok((julia, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Argument;

    #[test]
    fn json_with_defaults() {
        let json = r#"{
            "width": 1000,
            "height": 2000,
            "c": { "re": -0.74543, "im": 0.11301 },
            "max_iterations": 1000,
            "scale": { "mode": "extent", "extent": 2.0 }
        }"#;
        let req: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.escape_radius, 2.0);
        assert!(!req.periodicity_check);
        assert_eq!(req.center, Complex::ZERO);

        let (julia, viewport) = req.build().unwrap();
        assert_eq!(julia.c(), Complex::new(-0.74543, 0.11301));
        assert_eq!(julia.params().max_iterations, 1000);
        assert!((viewport.zoom() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn json_round_trip() {
        let req = GenerateRequest::with_zoom(64, 48, 20.0, Complex::new(-1.0, 0.0), 128);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""mode":"zoom""#));
        let back: GenerateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn build_rejects_bad_values() {
        let mut req = GenerateRequest::with_zoom(0, 4, 2.0, Complex::ZERO, 10);
        assert_eq!(req.build().unwrap_err().argument(), Argument::Width);

        req.width = 4;
        req.max_iterations = 0;
        assert_eq!(req.build().unwrap_err().argument(), Argument::MaxIterations);

        req.max_iterations = 10;
        req.scale = Scale::Zoom { zoom: -1.0 };
        assert_eq!(req.build().unwrap_err().argument(), Argument::Zoom);

        req.scale = Scale::Zoom { zoom: 1.0 };
        req.c = Complex::new(0.0, f64::INFINITY);
        assert_eq!(req.build().unwrap_err().argument(), Argument::C);
    }

    #[test]
    fn center_is_applied() {
        let mut req = GenerateRequest::with_zoom(10, 10, 5.0, Complex::ZERO, 10);
        req.center = Complex::new(0.25, -0.5);
        let (_, viewport) = req.build().unwrap();
        assert_eq!(viewport.center, Complex::new(0.25, -0.5));
        assert!((viewport.zoom() - 5.0).abs() < 1e-12);
    }
}
