use crate::error::{Argument, CoreError};

/// Parameters controlling the escape-time iteration.
///
/// The cached `escape_radius_sq` field is recomputed on deserialization so
/// a request loaded from JSON is always consistent with its radius.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EscapeParams {
    /// Iteration cap. A pixel reaching it is presumed inside the set.
    pub max_iterations: u32,

    /// Bailout radius: once `|z|` exceeds this, the orbit has escaped.
    pub escape_radius: f64,

    /// Stop early when the orbit is detected as periodic (Brent's algorithm).
    pub periodicity_check: bool,

    #[serde(skip)]
    escape_radius_sq: f64,
}

impl<'de> serde::Deserialize<'de> for EscapeParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            max_iterations: u32,
            #[serde(default = "default_escape_radius")]
            escape_radius: f64,
            #[serde(default)]
            periodicity_check: bool,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self {
            max_iterations: raw.max_iterations,
            escape_radius: raw.escape_radius,
            periodicity_check: raw.periodicity_check,
            escape_radius_sq: raw.escape_radius * raw.escape_radius,
        })
    }
}

pub(crate) fn default_escape_radius() -> f64 {
    EscapeParams::DEFAULT_ESCAPE_RADIUS
}

impl EscapeParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
    pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

    pub fn new(max_iterations: u32, escape_radius: f64) -> crate::Result<Self> {
        let params = Self {
            max_iterations,
            escape_radius,
            periodicity_check: false,
            escape_radius_sq: escape_radius * escape_radius,
        };
        params.validate()?;
        Ok(params)
    }

    /// Params with the conventional radius of 2.
    pub fn with_max_iterations(max_iterations: u32) -> crate::Result<Self> {
        Self::new(max_iterations, Self::DEFAULT_ESCAPE_RADIUS)
    }

    /// Check invariants. Deserialized params must pass through here before use.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_iterations < 1 {
            return Err(CoreError::invalid(
                Argument::MaxIterations,
                format!("must be >= 1, got {}", self.max_iterations),
            ));
        }
        if self.escape_radius <= 0.0 || !self.escape_radius.is_finite() {
            return Err(CoreError::invalid(
                Argument::EscapeRadius,
                format!("must be positive and finite, got {}", self.escape_radius),
            ));
        }
        Ok(())
    }

    /// Pre-computed squared escape radius for the inner loop.
    #[inline]
    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius_sq
    }

    pub fn with_periodicity_check(self, enabled: bool) -> Self {
        Self {
            periodicity_check: enabled,
            ..self
        }
    }
}

impl Default for EscapeParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            escape_radius: Self::DEFAULT_ESCAPE_RADIUS,
            periodicity_check: false,
            escape_radius_sq: Self::DEFAULT_ESCAPE_RADIUS * Self::DEFAULT_ESCAPE_RADIUS,
        }
    }
}
