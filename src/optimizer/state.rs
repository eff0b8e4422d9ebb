use core::cmp::Ordering;
use core::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::objective::{Objective, Progress};
use crate::pool::Batch;

use super::{Failure, Optimizer, STEP_DECAY, Solution, Termination};

/// Mutable state of one run. Only the driver loop touches it, and only
/// between batches.
#[derive(Clone, Debug)]
pub(super) struct State {
    pub(super) best: Vec<f64>,
    pub(super) best_score: f64,
    pub(super) best_guess: Vec<f64>,
    pub(super) best_guess_score: f64,
    pub(super) steps: Vec<f64>,
    pub(super) iterations: usize,
    pub(super) history: Vec<f64>,
}

impl State {
    pub(super) fn new(best: Vec<f64>, best_score: f64, steps: Vec<f64>) -> Self {
        Self {
            best_guess: best.clone(),
            best,
            best_score,
            best_guess_score: best_score,
            steps,
            iterations: 0,
            history: Vec::new(),
        }
    }

    /// Runs one iteration: escalates through the tiers until a batch beats
    /// the best score, then commits.
    ///
    /// Returns `Break` when the run has converged.
    pub(super) fn guess_round<O: Objective>(
        &mut self,
        optimizer: &Optimizer,
        objective: &O,
    ) -> Result<ControlFlow<()>> {
        self.best_guess.clone_from(&self.best);
        self.best_guess_score = self.best_score;

        for &tier in &optimizer.tiers {
            let batch = Batch {
                base: &self.best,
                steps: &self.steps,
                limits: &optimizer.limits,
                rng: &optimizer.rng,
                objective,
                evaluation: optimizer.evaluation,
            };
            let winner = batch.evaluate(tier)?;

            match winner {
                Some(candidate) if candidate.score > self.best_guess_score => {
                    trace_debug!(tier, score = candidate.score, "tier improved on best");
                    self.best_guess = candidate.guess;
                    self.best_guess_score = candidate.score;
                    break;
                }
                _ => {
                    trace_debug!(tier, "tier found no improvement");
                }
            }
        }

        let flow = self.commit(optimizer.target);
        self.iterations += 1;
        self.history.push(self.best_score);
        Ok(flow)
    }

    /// Adopts the best guess if it beats the best, and decides whether the
    /// improvement was large enough to keep going.
    pub(super) fn commit(&mut self, target: f64) -> ControlFlow<()> {
        let old_score = self.best_score;
        if self.best_guess_score > self.best_score {
            self.update_steps();
            self.best_score = self.best_guess_score;
            self.best.clone_from(&self.best_guess);
        }

        // NaN deltas (e.g. an infinite starting score) count as no progress.
        let delta = self.best_score - old_score;
        match delta.partial_cmp(&target) {
            Some(Ordering::Greater) => ControlFlow::Continue(()),
            _ => ControlFlow::Break(()),
        }
    }

    /// `step = (step + |best - best_guess|) * STEP_DECAY`, per dimension.
    pub(super) fn update_steps(&mut self) {
        for ((step, best), guess) in self.steps.iter_mut().zip(&self.best).zip(&self.best_guess) {
            *step = (*step + (best - guess).abs()) * STEP_DECAY;
        }
    }

    pub(super) fn progress(&self) -> Progress<'_> {
        Progress {
            iteration: self.iterations,
            best: &self.best,
            best_score: self.best_score,
            steps: &self.steps,
        }
    }

    pub(super) fn into_solution(self, termination: Termination) -> Solution {
        Solution {
            best: self.best,
            score: self.best_score,
            iterations: self.iterations,
            termination,
            history: self.history,
        }
    }

    pub(super) fn into_failure(self, error: Error) -> Failure {
        let guess = match &error {
            Error::Objective { guess, .. } => guess.clone(),
            _ => self.best_guess,
        };
        Failure {
            best: self.best,
            best_score: Some(self.best_score),
            iteration: self.iterations,
            guess,
            guess_score: Some(self.best_guess_score),
            error: Box::new(error),
        }
    }
}
