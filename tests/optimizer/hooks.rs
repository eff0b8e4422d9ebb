use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};

use guesswork::{Error, Objective, Optimizer, Progress, Termination};

struct StopAbove<'a> {
    threshold: f64,
    after_calls: &'a AtomicUsize,
}

impl Objective for StopAbove<'_> {
    type Error = Error;

    fn score(&self, args: &[f64]) -> Result<f64, Error> {
        Ok(args[0])
    }

    fn after_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
        self.after_calls.fetch_add(1, Ordering::SeqCst);
        if progress.best_score > self.threshold {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn after_iteration_stops_the_run() {
    let optimizer = Optimizer::builder(1).seed(10).build().unwrap();
    let calls = AtomicUsize::new(0);
    let objective = StopAbove {
        threshold: 5.0,
        after_calls: &calls,
    };

    let solution = optimizer.optimize(objective).unwrap();

    assert_eq!(solution.termination, Termination::Stopped);
    assert!(solution.score > 5.0);
    assert_eq!(calls.load(Ordering::SeqCst), solution.iterations);
}

struct CancelImmediately;

impl Objective for CancelImmediately {
    type Error = Error;

    fn score(&self, args: &[f64]) -> Result<f64, Error> {
        Ok(-args[0] * args[0])
    }

    fn before_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
        assert_eq!(progress.iteration, 0);
        ControlFlow::Break(())
    }
}

#[test]
fn before_iteration_break_runs_no_iterations() {
    let optimizer = Optimizer::new(1);

    let solution = optimizer.optimize(CancelImmediately).unwrap();

    assert_eq!(solution.iterations, 0);
    assert_eq!(solution.termination, Termination::Stopped);
    assert_eq!(solution.best, vec![1.0]);
    assert_eq!(solution.score, -1.0);
}

#[test]
fn negated_objective_forwards_hooks() {
    let optimizer = Optimizer::new(1);

    let solution = optimizer
        .optimize(guesswork::negate(CancelImmediately))
        .unwrap();

    assert_eq!(solution.termination, Termination::Stopped);
    assert_eq!(solution.score, 1.0);
}
