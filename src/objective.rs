//! The [`Objective`] trait defines what gets optimized.
//!
//! The optimizer always **maximizes**. For simple scoring functions pass a
//! closure directly to [`Optimizer::optimize`](crate::Optimizer::optimize):
//!
//! ```
//! use guesswork::prelude::*;
//!
//! let optimizer = Optimizer::builder(1).seed(7).build().unwrap();
//! let solution = optimizer
//!     .optimize(|x: &[f64]| Ok::<_, Error>(-(x[0] - 3.0).powi(2)))
//!     .unwrap();
//! assert!((solution.best[0] - 3.0).abs() < 1e-3);
//! ```
//!
//! To minimize, wrap the objective with [`negate`]:
//!
//! ```
//! use guesswork::prelude::*;
//!
//! let optimizer = Optimizer::builder(2).seed(7).build().unwrap();
//! let sphere = |x: &[f64]| Ok::<_, Error>(x.iter().map(|v| v * v).sum::<f64>());
//! let solution = optimizer.optimize(negate(sphere)).unwrap();
//! assert!(solution.best.iter().all(|v| v.abs() < 1e-3));
//! ```
//!
//! For early stopping, implement [`Objective`] on a struct and override the
//! iteration hooks:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use guesswork::prelude::*;
//!
//! struct StopAtTen;
//!
//! impl Objective for StopAtTen {
//!     type Error = Error;
//!
//!     fn score(&self, args: &[f64]) -> Result<f64> {
//!         Ok(args[0])
//!     }
//!
//!     fn after_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
//!         if progress.best_score >= 10.0 {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let optimizer = Optimizer::builder(1).seed(3).build().unwrap();
//! let solution = optimizer.optimize(StopAtTen).unwrap();
//! assert_eq!(solution.termination, Termination::Stopped);
//! assert!(solution.score >= 10.0);
//! ```

use core::ops::ControlFlow;

use crate::error::BoxError;

/// A read-only view of a run between two iterations.
#[derive(Clone, Copy, Debug)]
pub struct Progress<'a> {
    /// Number of iterations executed so far.
    pub iteration: usize,
    /// The best argument vector committed so far.
    pub best: &'a [f64],
    /// Score of [`best`](Self::best).
    pub best_score: f64,
    /// Current per-dimension step sizes.
    pub steps: &'a [f64],
}

/// A scoring function to be maximized, with optional iteration hooks.
///
/// # Thread safety
///
/// Guesses within one batch are scored concurrently, so implementations
/// must be `Sync`. The optimizer never serializes calls into
/// [`score`](Objective::score).
pub trait Objective: Sync {
    /// The error type returned by [`score`](Objective::score).
    type Error: Into<BoxError>;

    /// Score one argument vector. Higher is better.
    ///
    /// `args` always has one entry per configured dimension.
    ///
    /// # Errors
    ///
    /// Any error aborts the run; there are no retries.
    fn score(&self, args: &[f64]) -> Result<f64, Self::Error>;

    /// Called before each iteration starts.
    ///
    /// Return `ControlFlow::Break(())` to end the run before the next
    /// iteration. Default: always continues.
    fn before_iteration(&self, _progress: &Progress<'_>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after each iteration has committed its result.
    ///
    /// Return `ControlFlow::Break(())` to end the run. Default: always
    /// continues.
    fn after_iteration(&self, _progress: &Progress<'_>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E> + Sync,
    E: Into<BoxError>,
{
    type Error = E;

    fn score(&self, args: &[f64]) -> Result<f64, E> {
        self(args)
    }
}

/// An objective whose score is the negation of the wrapped one.
///
/// Created by [`negate`]. Errors pass through unchanged and the hooks are
/// forwarded.
#[derive(Clone, Debug)]
pub struct Negate<O>(pub O);

impl<O: Objective> Objective for Negate<O> {
    type Error = O::Error;

    fn score(&self, args: &[f64]) -> Result<f64, Self::Error> {
        self.0.score(args).map(|v| -v)
    }

    fn before_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
        self.0.before_iteration(progress)
    }

    fn after_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
        self.0.after_iteration(progress)
    }
}

/// Turns a quantity to minimize into an objective to maximize.
#[must_use]
pub fn negate<O: Objective>(objective: O) -> Negate<O> {
    Negate(objective)
}
