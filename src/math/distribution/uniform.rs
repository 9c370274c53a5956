use rand::{Rng, RngCore};

use crate::error::{Error, Result};
use crate::math::distribution::Distribution;

/// Continuous uniform distribution on `[a, b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    /// Creates a uniform distribution on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless both ends are finite, `a < b`,
    /// and both the width `b - a` and the density `1 / (b - a)` are finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(Error::invalid(format!(
                "uniform requires finite a < b, got a={}, b={}",
                a, b
            )));
        }
        let width = b - a;
        if !width.is_finite() || !(1.0 / width).is_finite() {
            return Err(Error::invalid(format!(
                "uniform width b - a = {} is not representable, got a={}, b={}",
                width, a, b
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }
}

impl Distribution for Uniform {
    fn density(&self, x: f64) -> f64 {
        if self.a <= x && x <= self.b {
            1.0 / (self.b - self.a)
        } else {
            0.0
        }
    }

    fn density_bound(&self) -> f64 {
        1.0 / (self.b - self.a)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        Ok(rng.gen_range(self.a..=self.b))
    }

    fn name(&self) -> &'static str {
        "Uniform"
    }
}
