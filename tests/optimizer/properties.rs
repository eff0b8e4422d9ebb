use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

use guesswork::{Error, Objective, Optimizer, Progress, negate};

#[test]
fn history_never_decreases() {
    let optimizer = Optimizer::builder(3)
        .start(vec![4.0, -3.0, 2.0])
        .seed(77)
        .build()
        .unwrap();

    let solution = optimizer
        .optimize(negate(|x: &[f64]| {
            Ok::<_, Error>(x.iter().map(|v| v * v).sum::<f64>())
        }))
        .unwrap();

    assert_eq!(solution.history.len(), solution.iterations);
    assert!(solution.history.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(solution.history.last(), Some(&solution.score));
}

#[test]
fn zero_iterations_is_identity() {
    let optimizer = Optimizer::builder(3)
        .start(vec![0.1, 0.2, 0.3])
        .max_iterations(0)
        .build()
        .unwrap();

    let solution = optimizer
        .optimize(|x: &[f64]| Ok::<_, Error>(x.iter().sum::<f64>()))
        .unwrap();

    assert_eq!(solution.best, vec![0.1, 0.2, 0.3]);
    assert_eq!(solution.score, 0.1 + 0.2 + 0.3);
    assert_eq!(solution.iterations, 0);
}

#[test]
fn guesses_respect_limits() {
    let optimizer = Optimizer::builder(2)
        .start(vec![0.0, 0.0])
        .limits(vec![(-0.5, 0.5).into(), (0.0, 2.0).into()])
        .step(10.0)
        .max_iterations(20)
        .seed(1)
        .build()
        .unwrap();
    let outside = AtomicBool::new(false);

    optimizer
        .optimize(|x: &[f64]| {
            if !(-0.5..=0.5).contains(&x[0]) || !(0.0..=2.0).contains(&x[1]) {
                outside.store(true, Ordering::SeqCst);
            }
            Ok::<_, Error>(x[0] + x[1])
        })
        .unwrap();

    assert!(!outside.load(Ordering::SeqCst));
}

#[test]
fn large_target_stops_after_first_improvement() {
    let optimizer = Optimizer::builder(1)
        .start(vec![0.0])
        .target(1e6)
        .seed(6)
        .build()
        .unwrap();

    let solution = optimizer
        .optimize(|x: &[f64]| Ok::<_, Error>(x[0]))
        .unwrap();

    assert_eq!(solution.iterations, 1);
    // the improvement is committed even though it falls short of the target
    assert!(solution.score > 0.0);
}

#[test]
fn seeded_sequential_runs_are_reproducible() {
    let run = || {
        Optimizer::builder(2)
            .seed(31)
            .sequential()
            .tier_ceiling(256)
            .build()
            .unwrap()
            .optimize(negate(|x: &[f64]| {
                Ok::<_, Error>((x[0] - 0.3).powi(2) + (x[1] + 0.7).powi(2))
            }))
            .unwrap()
    };

    assert_eq!(run(), run());
}

struct WatchSteps<'a> {
    negative: &'a AtomicBool,
}

impl Objective for WatchSteps<'_> {
    type Error = Error;

    fn score(&self, args: &[f64]) -> Result<f64, Error> {
        Ok(-(args[0] - 2.0).powi(2) - (args[1] + 1.0).powi(2))
    }

    fn after_iteration(&self, progress: &Progress<'_>) -> ControlFlow<()> {
        if progress.steps.iter().any(|s| *s < 0.0) {
            self.negative.store(true, Ordering::SeqCst);
        }
        ControlFlow::Continue(())
    }
}

#[test]
fn steps_stay_non_negative() {
    let negative = AtomicBool::new(false);
    let optimizer = Optimizer::builder(2).seed(90).build().unwrap();

    optimizer
        .optimize(WatchSteps {
            negative: &negative,
        })
        .unwrap();

    assert!(!negative.load(Ordering::SeqCst));
}
