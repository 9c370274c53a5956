//! Unnormalized Gaussian restricted to a closed interval.
//!
//! The density is the base normal density multiplied by a positive scale `k`
//! inside `[a, b]` and zero outside. It deliberately does not integrate to one,
//! which makes it a useful rejection-sampling target: the estimator only ever
//! compares density ratios, so the normalizing constant never matters. There is
//! no sampler.

use crate::error::{Error, Result};
use crate::math::distribution::{Distribution, Gaussian};

/// Scale applied by [`TruncatedGaussian::new`].
pub const DEFAULT_SCALE: f64 = 1.25;

/// Gaussian density truncated to `[a, b]` and scaled by `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedGaussian {
    base: Gaussian,
    a: f64,
    b: f64,
    k: f64,
}

impl TruncatedGaussian {
    /// Truncated Gaussian with the default scale of [`DEFAULT_SCALE`].
    pub fn new(mean: f64, sd: f64, a: f64, b: f64) -> Result<Self> {
        Self::with_scale(mean, sd, a, b, DEFAULT_SCALE)
    }

    /// Truncated Gaussian with an explicit scale `k`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `mean` lies outside `[a, b]`, if
    /// `k` is not a finite positive number, or if `mean`/`sd` are not valid
    /// Gaussian parameters.
    pub fn with_scale(mean: f64, sd: f64, a: f64, b: f64, k: f64) -> Result<Self> {
        if !(a <= mean && mean <= b) {
            return Err(Error::invalid(format!(
                "mean {} is outside truncation range [{}, {}]",
                mean, a, b
            )));
        }
        if !k.is_finite() || k <= 0.0 {
            return Err(Error::invalid(format!(
                "scaling factor k must be positive, got {}",
                k
            )));
        }
        let base = Gaussian::new(mean, sd)?;
        Ok(Self { base, a, b, k })
    }

    /// The untruncated, normalized Gaussian this density is built from.
    pub fn base(&self) -> Gaussian {
        self.base
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn scale(&self) -> f64 {
        self.k
    }
}

impl Distribution for TruncatedGaussian {
    fn density(&self, x: f64) -> f64 {
        if self.a <= x && x <= self.b {
            self.k * self.base.density(x)
        } else {
            0.0
        }
    }

    // The mean is inside [a, b], so the base mode survives truncation.
    fn density_bound(&self) -> f64 {
        self.density(self.base.mean())
    }

    fn name(&self) -> &'static str {
        "TruncatedGaussian"
    }
}
