//! The optimizer, its configuration and the results of a run.

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, unbounded};
use crate::error::Error;
use crate::pool::Evaluation;
use crate::tiers::default_tiers;

mod builder;
mod run;
mod state;

#[cfg(feature = "async")]
mod async_impl;

pub use builder::OptimizerBuilder;

/// Default number of iterations before a run gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Default half-width of the perturbation in every dimension.
pub const DEFAULT_STEP: f64 = 1.0;

/// Default value of every dimension of the starting vector.
pub const DEFAULT_START: f64 = 1.0;

/// Multiplier applied to the step sizes after every improvement.
pub const STEP_DECAY: f64 = 0.7;

/// A derivative-free maximizer over a fixed number of real dimensions.
///
/// Each iteration perturbs the current best vector at random, scoring
/// batches of guesses of increasing size until one batch improves on the
/// best. Step sizes grow or shrink with the distance of recent improvements,
/// and the run ends once an iteration improves the best score by no more
/// than the configured target.
///
/// An `Optimizer` holds configuration and the random number generator only;
/// every call to [`optimize`](Self::optimize) starts a fresh run from the
/// configured starting vector.
///
/// # Examples
///
/// ```
/// use guesswork::{Bounds, Error, Optimizer};
///
/// let optimizer = Optimizer::builder(1)
///     .limits(vec![Bounds::new(1.0, 8.0)])
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let solution = optimizer
///     .optimize(|x: &[f64]| Ok::<_, Error>(x[0] * (8.0 - x[0])))
///     .unwrap();
///
/// assert!((solution.best[0] - 4.0).abs() < 1e-3);
/// assert!((solution.score - 16.0).abs() < 1e-6);
/// ```
pub struct Optimizer {
    pub(crate) dims: usize,
    pub(crate) start: Vec<f64>,
    pub(crate) limits: Vec<Bounds>,
    pub(crate) target: f64,
    pub(crate) steps: Vec<f64>,
    pub(crate) max_iterations: usize,
    pub(crate) tiers: Vec<usize>,
    pub(crate) evaluation: Evaluation,
    pub(crate) rng: Mutex<fastrand::Rng>,
}

impl Optimizer {
    /// Create an optimizer over `dims` dimensions with default settings.
    ///
    /// See [`OptimizerBuilder`] for the defaults.
    #[must_use]
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            start: vec![DEFAULT_START; dims],
            limits: unbounded(dims),
            target: 0.0,
            steps: vec![DEFAULT_STEP; dims],
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tiers: default_tiers(),
            evaluation: Evaluation::Parallel,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Return an [`OptimizerBuilder`] for `dims` dimensions.
    #[must_use]
    pub fn builder(dims: usize) -> OptimizerBuilder {
        OptimizerBuilder::new(dims)
    }

    /// Number of dimensions searched.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// The configured starting vector.
    #[must_use]
    pub fn start(&self) -> &[f64] {
        &self.start
    }

    /// Per-dimension box limits.
    #[must_use]
    pub fn limits(&self) -> &[Bounds] {
        &self.limits
    }

    /// Minimum per-iteration improvement needed to keep going.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Initial per-dimension step sizes.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Upper bound on the number of iterations of a run.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Batch sizes tried, in order, within each iteration.
    #[must_use]
    pub fn tiers(&self) -> &[usize] {
        &self.tiers
    }

    /// How guesses within a batch are scored.
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }
}

impl core::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Optimizer")
            .field("dims", &self.dims)
            .field("start", &self.start)
            .field("limits", &self.limits)
            .field("target", &self.target)
            .field("steps", &self.steps)
            .field("max_iterations", &self.max_iterations)
            .field("tiers", &self.tiers)
            .field("evaluation", &self.evaluation)
            .finish_non_exhaustive()
    }
}

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// An iteration improved the best score by no more than the target.
    Converged,
    /// The iteration cap was reached.
    MaxIterations,
    /// An [`Objective`](crate::Objective) hook asked the run to stop.
    Stopped,
}

/// The result of a run that did not fail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The best argument vector found.
    pub best: Vec<f64>,
    /// Score of [`best`](Self::best).
    pub score: f64,
    /// Number of iterations executed, including the one that converged.
    pub iterations: usize,
    /// Why the run ended.
    pub termination: Termination,
    /// Best score after each executed iteration. Never decreases.
    pub history: Vec<f64>,
}

/// A run aborted by a scoring failure, with the partial results.
///
/// The display message names the iteration and the failing guess; the
/// underlying error is reachable through [`source`](core::error::Error::source).
#[derive(Debug, thiserror::Error)]
#[error("optimization failed at iteration {iteration} on guess {guess:?}")]
pub struct Failure {
    /// The best argument vector committed before the failure.
    pub best: Vec<f64>,
    /// Score of [`best`](Self::best), or `None` if the starting vector
    /// itself could not be scored.
    pub best_score: Option<f64>,
    /// Index of the iteration that failed; equals the number of completed
    /// iterations.
    pub iteration: usize,
    /// The guess whose scoring failed.
    pub guess: Vec<f64>,
    /// Best score found so far in the failing iteration.
    pub guess_score: Option<f64>,
    /// The underlying error.
    #[source]
    pub error: Box<Error>,
}
