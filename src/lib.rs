#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Derivative-free maximization of black-box scoring functions by tiered
//! random guessing.
//!
//! Each iteration perturbs the current best argument vector within a
//! per-dimension step, scoring a batch of guesses in parallel. Batches grow
//! (32, 64, 128, ...) until one of them beats the best; the winning move then
//! adjusts the step sizes, and the run stops once an iteration no longer
//! improves the score by more than a target.
//!
//! # Getting Started
//!
//! ```
//! use guesswork::prelude::*;
//!
//! let optimizer = Optimizer::builder(1)
//!     .limits(vec![Bounds::new(1.0, 8.0)])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let solution = optimizer
//!     .optimize(|x: &[f64]| Ok::<_, Error>(x[0] * (8.0 - x[0])))
//!     .unwrap();
//!
//! println!("x = {:.4}, f(x) = {:.4}", solution.best[0], solution.score);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Optimizer`] | Configuration plus RNG; [`Optimizer::optimize`] runs a search. |
//! | [`OptimizerBuilder`] | Fluent configuration: start, limits, steps, tiers, target. |
//! | [`Objective`] | The scoring function to maximize, with optional iteration hooks. |
//! | [`Solution`] / [`Failure`] | The outcome of a run, with partial results on failure. |
//! | [`metric::MseObjective`] | Turns model fitting into an objective via negated MSE. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `async` | [`Optimizer::optimize_async`] on tokio's blocking pool | off |
//! | `serde` | `Serialize`/`Deserialize` on [`Bounds`], [`Solution`], [`Termination`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at run and iteration boundaries | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod bounds;
mod error;
mod guess;
pub mod metric;
pub mod objective;
mod optimizer;
mod pool;
mod tiers;

pub use bounds::{Bounds, unbounded};
pub use error::{BoxError, Error, Result};
pub use objective::{Negate, Objective, Progress, negate};
pub use optimizer::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_START, DEFAULT_STEP, Failure, Optimizer, OptimizerBuilder,
    STEP_DECAY, Solution, Termination,
};
pub use pool::Evaluation;
pub use tiers::{DEFAULT_TIER_CEILING, FIRST_TIER, default_tiers, replicate_tiers};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use guesswork::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::error::{Error, Result};
    pub use crate::metric::MseObjective;
    pub use crate::objective::{Objective, Progress, negate};
    pub use crate::optimizer::{Failure, Optimizer, OptimizerBuilder, Solution, Termination};
    pub use crate::pool::Evaluation;
}
