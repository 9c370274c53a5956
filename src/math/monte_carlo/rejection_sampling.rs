//! Rejection-sampled expectations.
//!
//! Candidates are drawn from a normalized, samplable proposal `q` and kept with
//! probability `p(x) / (M * q(x))`, where `p` is the (possibly unnormalized)
//! target density and `M = p_max / q_max`. The kept draws are distributed as
//! the normalized target, so the mean of `f` over them estimates `E_p[f(X)]`.
//!
//! The estimate is only unbiased when `p(x) <= M * q(x)` everywhere the
//! proposal can land. That envelope condition is the caller's responsibility
//! and is not checked.

use rand::Rng;

use crate::error::{Error, Result};
use crate::math::distribution::Distribution;
use crate::math::monte_carlo::{MeanAccumulator, DEFAULT_NUM_SAMPLES};

/// Configuration for the rejection sampling estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionConfig {
    /// Number of accepted samples to average over
    pub num_accepted: usize,
    /// Upper limit on proposal draws; `None` keeps drawing until done
    pub max_attempts: Option<usize>,
}

impl Default for RejectionConfig {
    fn default() -> Self {
        Self {
            num_accepted: DEFAULT_NUM_SAMPLES,
            max_attempts: None,
        }
    }
}

impl RejectionConfig {
    pub fn new(num_accepted: usize) -> Self {
        Self {
            num_accepted,
            ..Self::default()
        }
    }

    /// Fails the estimate with `Error::AttemptsExhausted` after `max_attempts`
    /// proposal draws.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// Result of a rejection-sampling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectionEstimate {
    /// Mean of `f` over the accepted draws
    pub value: f64,
    /// Number of accepted draws
    pub accepted: usize,
    /// Number of proposal draws, accepted or not
    pub attempts: usize,
    /// Envelope constant used by the acceptance test
    pub envelope: f64,
}

impl RejectionEstimate {
    /// Fraction of proposal draws that were kept.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

/// Estimates `E[f(X)]` for `X ~ target` by rejection sampling from `proposal`,
/// averaging over `num_accepted` accepted draws. Uses the thread-local RNG.
///
/// `target` only needs `density` and `density_bound`; `proposal` must also
/// support `sample`.
///
/// # Errors
///
/// * `Error::Unsupported` if `proposal` cannot be sampled.
/// * `Error::InvalidParameter` if `num_accepted` is zero or the density
///   bounds do not give a finite positive envelope constant.
pub fn rejection_sampled_expectation<T, P, F>(
    target: &T,
    proposal: &P,
    f: F,
    num_accepted: usize,
) -> Result<f64>
where
    T: Distribution + ?Sized,
    P: Distribution + ?Sized,
    F: Fn(f64) -> f64,
{
    let mut rng = rand::thread_rng();
    rejection_sampled_expectation_with_rng(
        target,
        proposal,
        f,
        &RejectionConfig::new(num_accepted),
        &mut rng,
    )
}

/// Same as [`rejection_sampled_expectation`] with an explicit configuration
/// and RNG.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use rejection_mc::math::distribution::{TruncatedGaussian, Uniform};
/// use rejection_mc::math::monte_carlo::{
///     identity, rejection_sampled_expectation_with_rng, RejectionConfig,
/// };
///
/// let mut rng = ChaCha20Rng::seed_from_u64(17);
/// let target = TruncatedGaussian::new(1.75, 0.5, 0.75, 2.75).unwrap();
/// let proposal = Uniform::new(-3.0, 3.0).unwrap();
/// let mean = rejection_sampled_expectation_with_rng(
///     &target,
///     &proposal,
///     identity,
///     &RejectionConfig::default(),
///     &mut rng,
/// )
/// .unwrap();
/// assert!((mean - 1.75).abs() < 0.1);
/// ```
pub fn rejection_sampled_expectation_with_rng<T, P, F, R>(
    target: &T,
    proposal: &P,
    f: F,
    config: &RejectionConfig,
    rng: &mut R,
) -> Result<f64>
where
    T: Distribution + ?Sized,
    P: Distribution + ?Sized,
    F: Fn(f64) -> f64,
    R: Rng,
{
    rejection_sampled_estimate(target, proposal, f, config, rng).map(|est| est.value)
}

/// Runs the rejection sampler and reports the estimate together with the
/// accepted/attempted counts.
pub fn rejection_sampled_estimate<T, P, F, R>(
    target: &T,
    proposal: &P,
    f: F,
    config: &RejectionConfig,
    rng: &mut R,
) -> Result<RejectionEstimate>
where
    T: Distribution + ?Sized,
    P: Distribution + ?Sized,
    F: Fn(f64) -> f64,
    R: Rng,
{
    if config.num_accepted == 0 {
        return Err(Error::invalid("num_accepted must be positive"));
    }

    let envelope = envelope_constant(target, proposal)?;
    log::debug!(
        "rejection sampling {} from {}: envelope M = {}, {} samples requested",
        target.name(),
        proposal.name(),
        envelope,
        config.num_accepted
    );

    let mut acc = MeanAccumulator::default();
    let mut attempts = 0usize;

    while acc.count() < config.num_accepted {
        if let Some(limit) = config.max_attempts {
            if attempts >= limit {
                log::warn!(
                    "rejection sampling {} from {} stopped after {} attempts with {} of {} accepted",
                    target.name(),
                    proposal.name(),
                    attempts,
                    acc.count(),
                    config.num_accepted
                );
                return Err(Error::AttemptsExhausted {
                    attempts,
                    accepted: acc.count(),
                    requested: config.num_accepted,
                });
            }
        }

        let x = proposal.sample(rng)?;
        let u: f64 = rng.gen();
        attempts += 1;

        if accepts(target.density(x), proposal.density(x), envelope, u) {
            acc.push(f(x));
        }
    }

    let estimate = RejectionEstimate {
        value: acc.mean(),
        accepted: acc.count(),
        attempts,
        envelope,
    };
    log::debug!(
        "rejection sampling done: {} accepted of {} attempts (rate {:.4}), estimate {}",
        estimate.accepted,
        estimate.attempts,
        estimate.acceptance_rate(),
        estimate.value
    );
    Ok(estimate)
}

/// `M = target_max / proposal_max`, computed once per estimate.
fn envelope_constant<T, P>(target: &T, proposal: &P) -> Result<f64>
where
    T: Distribution + ?Sized,
    P: Distribution + ?Sized,
{
    let envelope = target.density_bound() / proposal.density_bound();
    if !envelope.is_finite() || envelope <= 0.0 {
        return Err(Error::invalid(format!(
            "density bounds of {} ({}) and {} ({}) give envelope constant {}",
            target.name(),
            target.density_bound(),
            proposal.name(),
            proposal.density_bound(),
            envelope
        )));
    }
    Ok(envelope)
}

/// Acceptance test `u * M * q(x) < p(x)`, written without a division.
/// With `u` in `[0, 1)` this accepts with probability exactly `p / (M * q)`.
/// Points where either density is zero are never accepted.
fn accepts(target_density: f64, proposal_density: f64, envelope: f64, u: f64) -> bool {
    proposal_density > 0.0 && u * envelope * proposal_density < target_density
}
