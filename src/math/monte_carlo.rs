//! Monte Carlo estimators for `E[f(X)]`.
//!
//! Two estimators are provided:
//! - [`direct`]: draw from the target itself and average `f`.
//! - [`rejection_sampling`]: draw from a proposal, keep each draw with
//!   probability `target(x) / (M * proposal(x))`, and average `f` over the
//!   kept draws. The target density only needs to be known up to a constant.
//!
//! Each estimator comes in two forms: a convenience function that uses
//! `rand::thread_rng()`, and a `_with_rng` form that takes any `Rng` so runs
//! can be seeded and reproduced.

pub mod direct;
pub mod rejection_sampling;

pub use direct::{monte_carlo_expectation, monte_carlo_expectation_with_rng};
pub use rejection_sampling::{
    rejection_sampled_estimate, rejection_sampled_expectation,
    rejection_sampled_expectation_with_rng, RejectionConfig, RejectionEstimate,
};

/// Default number of samples (direct) or accepted samples (rejection).
pub const DEFAULT_NUM_SAMPLES: usize = 2000;

/// Default function whose expectation is taken.
pub fn identity(x: f64) -> f64 {
    x
}

/// Running sum of `f(x)` values; only the mean is ever needed.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, or NaN when nothing was pushed.
    pub(crate) fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}
