use parking_lot::Mutex;

use crate::bounds::{Bounds, unbounded};
use crate::error::{Error, Result};
use crate::pool::Evaluation;
use crate::tiers::{default_tiers, replicate_tiers};

use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_START, DEFAULT_STEP, Optimizer};

/// Step configuration before it is resolved into one value per dimension.
#[derive(Clone, Debug)]
enum Step {
    Scalar(f64),
    PerDimension(Vec<f64>),
}

/// A builder for constructing [`Optimizer`] instances with a fluent API.
///
/// Created via [`Optimizer::builder()`].
///
/// # Defaults
///
/// - Start: every dimension `1.0`
/// - Limits: unbounded
/// - Target: `0.0`
/// - Step: `1.0` in every dimension
/// - Max iterations: `10_000`
/// - Tiers: `32, 64, ..., 8192`
/// - RNG: seeded from the system
/// - Evaluation: [`Parallel`](Evaluation::Parallel)
///
/// Limits must satisfy `lower <= upper` and tiers should be ascending;
/// neither is checked.
///
/// # Examples
///
/// ```
/// use guesswork::{Bounds, Optimizer};
///
/// let optimizer = Optimizer::builder(2)
///     .start(vec![0.5, 0.5])
///     .uniform_limits(Bounds::new(0.0, 1.0))
///     .step(0.1)
///     .target(1e-9)
///     .max_iterations(500)
///     .tier_ceiling(1024)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(optimizer.steps(), &[0.1, 0.1]);
/// assert_eq!(optimizer.tiers(), &[32, 64, 128, 256, 512, 1024]);
/// ```
#[derive(Debug)]
pub struct OptimizerBuilder {
    dims: usize,
    start: Option<Vec<f64>>,
    limits: Option<Vec<Bounds>>,
    target: f64,
    step: Step,
    max_iterations: usize,
    tiers: Option<Vec<usize>>,
    rng: Option<fastrand::Rng>,
    evaluation: Evaluation,
}

impl OptimizerBuilder {
    pub(super) fn new(dims: usize) -> Self {
        Self {
            dims,
            start: None,
            limits: None,
            target: 0.0,
            step: Step::Scalar(DEFAULT_STEP),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tiers: None,
            rng: None,
            evaluation: Evaluation::Parallel,
        }
    }

    /// Set the starting vector. Must have one entry per dimension.
    ///
    /// Entries outside the limits are clamped when a run starts.
    #[must_use]
    pub fn start(mut self, start: Vec<f64>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set per-dimension limits. Must have one entry per dimension.
    #[must_use]
    pub fn limits(mut self, limits: Vec<Bounds>) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Apply the same limits to every dimension.
    #[must_use]
    pub fn uniform_limits(mut self, bounds: Bounds) -> Self {
        self.limits = Some(vec![bounds; self.dims]);
        self
    }

    /// Set the minimum improvement an iteration must achieve for the run
    /// to continue.
    #[must_use]
    pub fn target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Use the same initial step size in every dimension.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = Step::Scalar(step);
        self
    }

    /// Set per-dimension initial step sizes. Must have one entry per
    /// dimension. Steps are expected to be non-negative.
    #[must_use]
    pub fn steps(mut self, steps: Vec<f64>) -> Self {
        self.step = Step::PerDimension(steps);
        self
    }

    /// Set the maximum number of iterations. `0` scores the starting
    /// vector and returns it.
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the batch sizes tried within each iteration, smallest first.
    #[must_use]
    pub fn tiers(mut self, tiers: Vec<usize>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    /// Use power-of-two tiers from 32 up to `ceiling`.
    ///
    /// See [`replicate_tiers`](crate::replicate_tiers).
    #[must_use]
    pub fn tier_ceiling(mut self, ceiling: usize) -> Self {
        self.tiers = Some(replicate_tiers(ceiling));
        self
    }

    /// Seed the random number generator for reproducible guesses.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(fastrand::Rng::with_seed(seed));
        self
    }

    /// Use the given random number generator.
    #[must_use]
    pub fn rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Choose how guesses within a batch are scored.
    #[must_use]
    pub fn evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Score guesses on the calling thread, one after another.
    ///
    /// With [`seed`](Self::seed) this makes whole runs reproducible.
    #[must_use]
    pub fn sequential(self) -> Self {
        self.evaluation(Evaluation::Sequential)
    }

    /// Build the [`Optimizer`], resolving the step configuration into one
    /// step per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the start vector, the limits
    /// or the per-dimension steps do not have one entry per dimension.
    pub fn build(self) -> Result<Optimizer> {
        let dims = self.dims;

        let start = self.start.unwrap_or_else(|| vec![DEFAULT_START; dims]);
        check_len("start", dims, start.len())?;

        let limits = self.limits.unwrap_or_else(|| unbounded(dims));
        check_len("limits", dims, limits.len())?;

        let steps = match self.step {
            Step::Scalar(step) => vec![step; dims],
            Step::PerDimension(steps) => steps,
        };
        check_len("steps", dims, steps.len())?;

        Ok(Optimizer {
            dims,
            start,
            limits,
            target: self.target,
            steps,
            max_iterations: self.max_iterations,
            tiers: self.tiers.unwrap_or_else(default_tiers),
            evaluation: self.evaluation,
            rng: Mutex::new(self.rng.unwrap_or_default()),
        })
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            what,
            expected,
            got,
        })
    }
}
