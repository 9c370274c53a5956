use rand::Rng;

use crate::error::{Error, Result};
use crate::math::distribution::Distribution;
use crate::math::monte_carlo::MeanAccumulator;

/// Estimates `E[f(X)]` for `X ~ target` by averaging `f` over `num_samples`
/// direct draws from `target`, using the thread-local RNG.
///
/// # Errors
///
/// * `Error::InvalidParameter` if `num_samples` is zero.
/// * `Error::Unsupported` if `target` cannot be sampled.
pub fn monte_carlo_expectation<D, F>(target: &D, f: F, num_samples: usize) -> Result<f64>
where
    D: Distribution + ?Sized,
    F: Fn(f64) -> f64,
{
    let mut rng = rand::thread_rng();
    monte_carlo_expectation_with_rng(target, f, num_samples, &mut rng)
}

/// Same as [`monte_carlo_expectation`] but draws from the supplied RNG.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use rejection_mc::math::distribution::Uniform;
/// use rejection_mc::math::monte_carlo::{identity, monte_carlo_expectation_with_rng};
///
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let u = Uniform::new(0.0, 2.0).unwrap();
/// let mean = monte_carlo_expectation_with_rng(&u, identity, 2000, &mut rng).unwrap();
/// assert!((mean - 1.0).abs() < 0.1);
/// ```
pub fn monte_carlo_expectation_with_rng<D, F, R>(
    target: &D,
    f: F,
    num_samples: usize,
    rng: &mut R,
) -> Result<f64>
where
    D: Distribution + ?Sized,
    F: Fn(f64) -> f64,
    R: Rng,
{
    if num_samples == 0 {
        return Err(Error::invalid("num_samples must be positive"));
    }

    let mut acc = MeanAccumulator::default();
    for _ in 0..num_samples {
        let x = target.sample(rng)?;
        acc.push(f(x));
    }

    let estimate = acc.mean();
    log::debug!(
        "direct monte carlo over {}: {} samples, estimate {}",
        target.name(),
        num_samples,
        estimate
    );
    Ok(estimate)
}
