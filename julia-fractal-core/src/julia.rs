use crate::complex::Complex;
use crate::error::{Argument, CoreError};
use crate::params::EscapeParams;

/// A Julia set: `z_{n+1} = z_n² + c`, where `c` is a fixed constant
/// and `z₀` is the point on the complex plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Julia {
    params: EscapeParams,

    /// The fixed constant `c` that defines this Julia set.
    c: Complex,
}

impl Julia {
    pub fn new(c: Complex, params: EscapeParams) -> crate::Result<Self> {
        if !c.is_finite() {
            return Err(CoreError::invalid(
                Argument::C,
                format!("components must be finite, got {c}"),
            ));
        }
        params.validate()?;
        Ok(Self { params, c })
    }

    /// Seahorse-valley constant `c = -0.74543 + 0.11301i`.
    pub fn default_c() -> Complex {
        Complex::new(-0.74543, 0.11301)
    }

    /// The constant `c` defining this Julia set.
    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn params(&self) -> &EscapeParams {
        &self.params
    }

    /// A real `c` makes the set symmetric about the real axis:
    /// the orbit of `conj(z)` is the conjugate of the orbit of `z`.
    pub fn is_real_axis_symmetric(&self) -> bool {
        self.c.is_real()
    }

    /// Number of completed `z → z² + c` steps before `|z|` exceeded the
    /// escape radius, or `max_iterations` if it never did.
    ///
    /// A `z0` already outside the radius counts 0. Non-finite magnitudes
    /// (overflow) are treated as escaped.
    pub fn escape_count(&self, z0: Complex) -> u32 {
        let escape_radius_sq = self.params.escape_radius_sq();
        let max_iter = self.params.max_iterations;
        let c = self.c;

        let mut z = z0;

        // Brent's cycle detection state.
        let mut old_z = z;
        let mut period: u32 = 0;
        let mut check: u32 = 3;

        for n in 0..max_iter {
            // Written so NaN fails the comparison and escapes.
            if !(z.norm_sq() <= escape_radius_sq) {
                return n;
            }

            z = Complex::new(z.re * z.re - z.im * z.im + c.re, 2.0 * z.re * z.im + c.im);

            if self.params.periodicity_check {
                if (z.re - old_z.re).abs() < 1e-13 && (z.im - old_z.im).abs() < 1e-13 {
                    return max_iter;
                }
                period += 1;
                if period > check {
                    old_z = z;
                    period = 0;
                    check = check.saturating_mul(2);
                }
            }
        }

        max_iter
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self {
            params: EscapeParams::default(),
            c: Self::default_c(),
        }
    }
}
