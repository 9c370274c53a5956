use std::f64::consts::PI;

use rand::RngCore;
use rand_distr::{Distribution as _, Normal};

use crate::error::{Error, Result};
use crate::math::distribution::Distribution;

/// Normal distribution with mean `mean` and standard deviation `sd`.
#[derive(Debug, Clone, Copy)]
pub struct Gaussian {
    mean: f64,
    sd: f64,
    normal: Normal<f64>,
}

impl PartialEq for Gaussian {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.sd == other.sd
    }
}

impl Gaussian {
    /// Creates a Gaussian with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `mean` is not finite or `sd` is
    /// not a finite positive number.
    pub fn new(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::invalid(format!(
                "gaussian mean must be finite, got {}",
                mean
            )));
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(Error::invalid(format!(
                "gaussian sd must be finite and positive, got {}",
                sd
            )));
        }
        let normal =
            Normal::new(mean, sd).map_err(|e| Error::invalid(format!("gaussian: {}", e)))?;
        Ok(Self { mean, sd, normal })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sd(&self) -> f64 {
        self.sd
    }
}

impl Distribution for Gaussian {
    fn density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.sd;
        (-0.5 * z * z).exp() / (self.sd * (2.0 * PI).sqrt())
    }

    // The mode of a normal density is its mean.
    fn density_bound(&self) -> f64 {
        self.density(self.mean)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        Ok(self.normal.sample(rng))
    }

    fn name(&self) -> &'static str {
        "Gaussian"
    }
}
