//! One-dimensional probability distributions used as Monte Carlo targets and
//! proposals.
//!
//! Every distribution exposes a density (which may be unnormalized), an upper
//! bound on that density, and optionally a sampler. Distributions that only
//! make sense as rejection-sampling targets leave `sample` at its default,
//! which fails with [`Error::Unsupported`].

use rand::RngCore;

use crate::error::{Error, Result};

pub mod gaussian;
pub mod truncated_gaussian;
pub mod uniform;

pub use gaussian::Gaussian;
pub use truncated_gaussian::TruncatedGaussian;
pub use uniform::Uniform;

/// Capability interface shared by all distributions.
pub trait Distribution {
    /// Density at `x`. Nonnegative, but need not integrate to one.
    fn density(&self, x: f64) -> f64;

    /// An upper bound on `density(x)` over the whole real line.
    ///
    /// This is a precondition, not a checked property: a bound that is too
    /// small silently biases rejection-sampling estimates.
    fn density_bound(&self) -> f64;

    /// Draws one value from the normalized distribution.
    fn sample(&self, _rng: &mut dyn RngCore) -> Result<f64> {
        Err(Error::Unsupported {
            distribution: self.name(),
            operation: "sample",
        })
    }

    /// Short name used in log lines and error messages.
    fn name(&self) -> &'static str;
}

impl<D: Distribution + ?Sized> Distribution for &D {
    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }

    fn density_bound(&self) -> f64 {
        (**self).density_bound()
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        (**self).sample(rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<D: Distribution + ?Sized> Distribution for Box<D> {
    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }

    fn density_bound(&self) -> f64 {
        (**self).density_bound()
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64> {
        (**self).sample(rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn all_variants() -> Vec<Box<dyn Distribution>> {
        vec![
            Box::new(Uniform::new(0.0, 2.0).unwrap()),
            Box::new(Uniform::new(-3.0, 3.0).unwrap()),
            Box::new(Gaussian::new(2.5, 1.0).unwrap()),
            Box::new(Gaussian::new(1.75, 0.5).unwrap()),
            Box::new(TruncatedGaussian::new(0.0, 1.0, 0.0, 1.0).unwrap()),
            Box::new(TruncatedGaussian::new(1.75, 0.5, 0.75, 2.75).unwrap()),
            Box::new(TruncatedGaussian::with_scale(1.0, 2.0, -1.0, 4.0, 0.3).unwrap()),
        ]
    }

    #[test]
    fn test_density_within_bound() {
        for dist in all_variants() {
            let bound = dist.density_bound();
            for i in -800..=800 {
                let x = i as f64 / 100.0;
                let p = dist.density(x);
                assert!(p >= 0.0, "{} density negative at {}", dist.name(), x);
                assert!(
                    p <= bound + 1e-12,
                    "{} density {} exceeds bound {} at {}",
                    dist.name(),
                    p,
                    bound,
                    x
                );
            }
        }
    }

    #[test]
    fn test_trait_objects_forward() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let u = Uniform::new(0.0, 2.0).unwrap();
        let by_ref: &dyn Distribution = &u;
        let boxed: Box<dyn Distribution> = Box::new(u.clone());

        assert_eq!(by_ref.density(1.0), boxed.density(1.0));
        assert_eq!(by_ref.density_bound(), boxed.density_bound());
        assert_eq!(by_ref.name(), "Uniform");
        let x = boxed.sample(&mut rng).unwrap();
        assert!((0.0..=2.0).contains(&x));
    }

    #[test]
    fn test_default_sample_is_unsupported() {
        struct DensityOnly;

        impl Distribution for DensityOnly {
            fn density(&self, _x: f64) -> f64 {
                1.0
            }

            fn density_bound(&self) -> f64 {
                1.0
            }

            fn name(&self) -> &'static str {
                "DensityOnly"
            }
        }

        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(
            DensityOnly.sample(&mut rng),
            Err(Error::Unsupported {
                distribution: "DensityOnly",
                operation: "sample",
            })
        );
    }
}
