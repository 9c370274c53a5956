use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rejection_mc::{
    identity, monte_carlo_expectation_with_rng, rejection_sampled_estimate, Distribution,
    Gaussian, RejectionConfig, Result, TruncatedGaussian, Uniform,
};

const TOLERANCE: f64 = 0.1;

struct Checker {
    failures: usize,
}

impl Checker {
    fn close(&mut self, label: &str, expected: f64, actual: f64) {
        if (expected - actual).abs() <= TOLERANCE {
            println!("  {label}: {actual:.4} (expected {expected})");
        } else {
            println!("  FAILED {label}: {actual:.4} (expected {expected} +/- {TOLERANCE})");
            self.failures += 1;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn rejection(
        &mut self,
        label: &str,
        expected: f64,
        target: &dyn Distribution,
        proposal: &dyn Distribution,
        f: impl Fn(f64) -> f64,
        config: &RejectionConfig,
        rng: &mut ChaCha20Rng,
    ) -> Result<()> {
        let est = rejection_sampled_estimate(target, proposal, f, config, rng)?;
        self.close(label, expected, est.value);
        println!(
            "    accepted {} of {} draws ({:.1}%)",
            est.accepted,
            est.attempts,
            100.0 * est.acceptance_rate()
        );
        Ok(())
    }

    fn holds(&mut self, label: &str, ok: bool) {
        if !ok {
            println!("  FAILED {label}");
            self.failures += 1;
        }
    }
}

fn run(rng: &mut ChaCha20Rng, checker: &mut Checker) -> Result<()> {
    let norm25 = Gaussian::new(2.5, 1.0)?;
    let u02 = Uniform::new(0.0, 2.0)?;
    let u33 = Uniform::new(-3.0, 3.0)?;
    let half_trunc = TruncatedGaussian::new(0.0, 1.0, 0.0, 1.0)?;
    let trunc = TruncatedGaussian::new(1.75, 0.5, 0.75, 2.75)?;
    let untrunc = trunc.base();
    let config = RejectionConfig::default();
    let n = config.num_accepted;

    println!("Basic tests...");
    let x = u02.sample(rng)?;
    checker.holds("U02 sample in [0, 2]", (0.0..=2.0).contains(&x));
    checker.holds("U02 pdf(1.4) == 0.5", u02.density(1.4) == 0.5);
    checker.holds("U02 pdf(7.0) == 0.0", u02.density(7.0) == 0.0);
    checker.holds("U02 max pdf == 0.5", u02.density_bound() == 0.5);
    checker.close(
        "E[X], X ~ U02",
        1.0,
        monte_carlo_expectation_with_rng(&u02, identity, n, rng)?,
    );
    checker.close(
        "E[X], X ~ N(2.5, 1)",
        2.5,
        monte_carlo_expectation_with_rng(&norm25, identity, n, rng)?,
    );
    checker.close(
        "E[(X - 2.5)^2], X ~ N(2.5, 1)",
        1.0,
        monte_carlo_expectation_with_rng(&norm25, |x| (x - 2.5).powi(2), n, rng)?,
    );

    println!("target=U02, proposal=U02...");
    checker.rejection("E[5 + X]", 6.0, &u02, &u02, |x| 5.0 + x, &config, rng)?;

    println!("target=norm25, proposal=norm25...");
    checker.rejection("E[X]", 2.5, &norm25, &norm25, identity, &config, rng)?;
    checker.rejection(
        "E[(X - 2.5)^2]",
        1.0,
        &norm25,
        &norm25,
        |x| (x - 2.5).powi(2),
        &config,
        rng,
    )?;

    println!("target=half_trunc, proposal=U02...");
    checker.rejection("E[X]", 0.46, &half_trunc, &u02, identity, &config, rng)?;

    println!("target=trunc, proposal=U33...");
    checker.rejection("E[X]", 1.75, &trunc, &u33, identity, &config, rng)?;
    checker.rejection("E[2X]", 3.5, &trunc, &u33, |x| 2.0 * x, &config, rng)?;

    println!("target=trunc, proposal=untrunc...");
    checker.rejection("E[X]", 1.75, &trunc, &untrunc, identity, &config, rng)?;
    checker.rejection("E[2X]", 3.5, &trunc, &untrunc, |x| 2.0 * x, &config, rng)?;

    Ok(())
}

fn main() -> ExitCode {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(123);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut checker = Checker { failures: 0 };

    if let Err(e) = run(&mut rng, &mut checker) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    if checker.failures > 0 {
        println!("{} check(s) failed", checker.failures);
        return ExitCode::FAILURE;
    }
    println!("ok");
    ExitCode::SUCCESS
}
