use std::sync::atomic::{AtomicBool, Ordering};

use rand::RngCore;
use tracing::{debug, info};

use crate::config::AlloyConfig;
use crate::error::Error;
use crate::geometry::Lattice;
use crate::mcmc::{metropolis_step, StepOutcome};

/// Per-run step counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Steps executed (equals `config.iterations` on success).
    pub iterations: u64,
    /// Unlike-pair swaps performed.
    pub accepted: u64,
    /// Unlike-pair swaps rejected by the Metropolis draw.
    pub rejected: u64,
    /// Attempts that picked a same-species pair.
    pub same_species: u64,
}

impl RunReport {
    /// Fraction of unlike-pair attempts that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        let proposals = self.accepted + self.rejected;
        if proposals == 0 {
            return 0.0;
        }
        self.accepted as f64 / proposals as f64
    }
}

/// Drive `lattice` through `config.iterations` Metropolis swap attempts.
///
/// Takes the lattice by exclusive borrow for the duration of the run; the
/// caller owns the random source, so seeded runs are reproducible. The
/// configuration is validated before the first step (fail fast, no partial
/// mutation on bad input). `interrupted` is checked between iterations and
/// aborts with [`Error::Interrupted`]; `on_step` is called once per
/// iteration (useful for progress bars).
///
/// Composition is invariant: every accepted move exchanges two labels,
/// never converts one.
pub fn run<R: RngCore>(
    lattice: &mut Lattice,
    config: &AlloyConfig,
    rng: &mut R,
    interrupted: &AtomicBool,
    on_step: &dyn Fn(),
) -> Result<RunReport, Error> {
    config.checked()?;
    if lattice.size() != config.size {
        return Err(Error::invalid(format!(
            "lattice is {}x{} but config.size is {}",
            lattice.size(),
            lattice.size(),
            config.size
        )));
    }

    let kt = config.kt();
    let mut report = RunReport::default();

    for _ in 0..config.iterations {
        if interrupted.load(Ordering::Relaxed) {
            return Err(Error::Interrupted);
        }
        on_step();

        match metropolis_step(lattice, config.mixing_energy, kt, rng)? {
            StepOutcome::Accepted => report.accepted += 1,
            StepOutcome::Rejected => report.rejected += 1,
            StepOutcome::SameSpecies => report.same_species += 1,
        }
        report.iterations += 1;
    }

    debug!(
        accepted = report.accepted,
        rejected = report.rejected,
        same_species = report.same_species,
        "run complete"
    );
    Ok(report)
}

/// Validate, initialize, and run: the full pipeline for one configuration.
///
/// Returns the finished lattice together with the step counters. The
/// lattice is freshly allocated per invocation and never reused.
pub fn simulate<R: RngCore>(
    config: &AlloyConfig,
    rng: &mut R,
    interrupted: &AtomicBool,
    on_step: &dyn Fn(),
) -> Result<(Lattice, RunReport), Error> {
    config.checked()?;
    info!(
        size = config.size,
        fraction_a = config.fraction_a,
        iterations = config.iterations,
        temperature = config.temperature,
        mixing_energy = config.mixing_energy,
        "starting alloy anneal"
    );

    let mut lattice = Lattice::random(config.size, config.fraction_a, rng)?;
    let report = run(&mut lattice, config, rng, interrupted, on_step)?;

    info!(
        accepted = report.accepted,
        acceptance_rate = report.acceptance_rate(),
        "anneal finished"
    );
    Ok((lattice, report))
}
