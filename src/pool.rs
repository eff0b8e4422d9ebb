//! Concurrent scoring of a batch of guesses.

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::guess::make_guess_locked;
use crate::objective::Objective;

/// How the guesses of one batch are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Score guesses concurrently on the rayon thread pool.
    #[default]
    Parallel,
    /// Score guesses one after another on the calling thread.
    ///
    /// Together with a seeded RNG this makes runs bit-reproducible.
    Sequential,
}

/// A scored guess.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) guess: Vec<f64>,
    pub(crate) score: f64,
}

/// Everything a batch needs besides its size.
pub(crate) struct Batch<'a, O> {
    pub(crate) base: &'a [f64],
    pub(crate) steps: &'a [f64],
    pub(crate) limits: &'a [Bounds],
    pub(crate) rng: &'a Mutex<fastrand::Rng>,
    pub(crate) objective: &'a O,
    pub(crate) evaluation: Evaluation,
}

impl<O: Objective> Batch<'_, O> {
    /// Generates and scores `n` guesses, returning the best one.
    ///
    /// Every unit runs to completion before the batch is inspected. If any
    /// unit failed, the first failure in generation order is returned.
    /// Otherwise the highest score wins and ties keep the earliest guess.
    /// NaN scores never win; `Ok(None)` means there was nothing to pick.
    pub(crate) fn evaluate(&self, n: usize) -> Result<Option<Candidate>> {
        let outcomes: Vec<Result<Candidate>> = match self.evaluation {
            Evaluation::Parallel => (0..n).into_par_iter().map(|_| self.unit()).collect(),
            Evaluation::Sequential => (0..n).map(|_| self.unit()).collect(),
        };

        let mut best: Option<Candidate> = None;
        for outcome in outcomes {
            let candidate = outcome?;
            if candidate.score.is_nan() {
                continue;
            }
            if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    fn unit(&self) -> Result<Candidate> {
        let mut guess = Vec::with_capacity(self.base.len());
        make_guess_locked(&mut guess, self.base, self.steps, self.limits, self.rng);
        match self.objective.score(&guess) {
            Ok(score) => Ok(Candidate { guess, score }),
            Err(e) => Err(Error::Objective {
                guess,
                source: e.into(),
            }),
        }
    }
}
