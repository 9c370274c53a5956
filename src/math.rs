pub mod distribution;
pub mod monte_carlo;

pub use distribution::{Distribution, Gaussian, TruncatedGaussian, Uniform};

pub use monte_carlo::{
    identity, monte_carlo_expectation, monte_carlo_expectation_with_rng,
    rejection_sampled_estimate, rejection_sampled_expectation,
    rejection_sampled_expectation_with_rng, RejectionConfig, RejectionEstimate,
    DEFAULT_NUM_SAMPLES,
};
