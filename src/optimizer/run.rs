use core::ops::ControlFlow;

use crate::error::Error;
use crate::objective::Objective;

use super::state::State;
use super::{Failure, Optimizer, Solution, Termination};

impl Optimizer {
    /// Run an optimization, maximizing `objective`.
    ///
    /// The starting vector is clamped into the limits and scored once. Each
    /// iteration then tries the tiers in order until a batch beats the
    /// current best; the run ends when an iteration improves the best score
    /// by no more than [`target`](Self::target), when
    /// [`max_iterations`](Self::max_iterations) have run, or when one of the
    /// objective's hooks breaks.
    ///
    /// Accepts any [`Objective`], including plain closures
    /// (`Fn(&[f64]) -> Result<f64, E>`).
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] as soon as the objective fails on any guess.
    /// The failure carries the best vector found so far, the iteration
    /// index and the failing guess. Sibling guesses of the failing batch are
    /// still scored before the failure is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use guesswork::{Error, Optimizer, Termination, negate};
    ///
    /// let optimizer = Optimizer::builder(1).seed(1).build().unwrap();
    /// let solution = optimizer
    ///     .optimize(negate(|x: &[f64]| Ok::<_, Error>(x[0] * x[0])))
    ///     .unwrap();
    ///
    /// assert_eq!(solution.termination, Termination::Converged);
    /// assert!(solution.best[0].abs() < 1e-3);
    /// ```
    #[allow(clippy::needless_pass_by_value)]
    pub fn optimize<O: Objective>(&self, objective: O) -> Result<Solution, Failure> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "optimize",
            dims = self.dims,
            max_iterations = self.max_iterations
        )
        .entered();

        let start: Vec<f64> = self
            .start
            .iter()
            .zip(&self.limits)
            .map(|(&x, bounds)| bounds.clamp(x))
            .collect();

        let score = match objective.score(&start) {
            Ok(score) => score,
            Err(e) => {
                trace_debug!("starting vector could not be scored");
                return Err(Failure {
                    best: start.clone(),
                    best_score: None,
                    iteration: 0,
                    guess: start.clone(),
                    guess_score: None,
                    error: Box::new(Error::Objective {
                        guess: start,
                        source: e.into(),
                    }),
                });
            }
        };
        trace_info!(score, "starting optimization");

        let mut state = State::new(start, score, self.steps.clone());
        let termination = loop {
            if state.iterations >= self.max_iterations {
                break Termination::MaxIterations;
            }
            if let ControlFlow::Break(()) = objective.before_iteration(&state.progress()) {
                break Termination::Stopped;
            }

            let verdict = match state.guess_round(self, &objective) {
                Ok(verdict) => verdict,
                Err(e) => {
                    trace_debug!(iteration = state.iterations, "objective failed");
                    return Err(state.into_failure(e));
                }
            };
            trace_debug!(
                iteration = state.iterations,
                score = state.best_score,
                "iteration finished"
            );

            let hook = objective.after_iteration(&state.progress());
            if verdict.is_break() {
                break Termination::Converged;
            }
            if hook.is_break() {
                break Termination::Stopped;
            }
        };

        trace_info!(
            iterations = state.iterations,
            score = state.best_score,
            termination = ?termination,
            "optimization finished"
        );
        Ok(state.into_solution(termination))
    }
}
