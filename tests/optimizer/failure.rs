use std::sync::atomic::{AtomicUsize, Ordering};

use guesswork::{Error, Optimizer};

#[derive(Debug)]
struct OutOfDomain(f64);

impl std::fmt::Display for OutOfDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is outside the model domain", self.0)
    }
}

impl std::error::Error for OutOfDomain {}

#[test]
fn failure_mid_run_keeps_partial_results() {
    // increasing objective that refuses to score anything above 3
    let optimizer = Optimizer::builder(1).seed(21).build().unwrap();

    let failure = optimizer
        .optimize(|x: &[f64]| {
            if x[0] > 3.0 {
                Err(OutOfDomain(x[0]))
            } else {
                Ok(x[0])
            }
        })
        .expect_err("the run should hit the domain limit");

    assert!(failure.iteration > 0);
    assert!(failure.best[0] <= 3.0);
    assert!(failure.best[0] > 1.0);
    assert_eq!(failure.best_score, Some(failure.best[0]));
    assert!(failure.guess[0] > 3.0);
    assert!(failure.guess_score.is_some());

    match failure.error.as_ref() {
        Error::Objective { guess, source } => {
            assert_eq!(guess, &failure.guess);
            assert!(source.downcast_ref::<OutOfDomain>().is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failure_message_carries_context() {
    let optimizer = Optimizer::builder(1).seed(4).build().unwrap();

    let failure = optimizer
        .optimize(|x: &[f64]| {
            if x[0] > 1.2 {
                Err("diverged")
            } else {
                Ok(x[0])
            }
        })
        .unwrap_err();

    let message = failure.to_string();
    assert!(message.starts_with("optimization failed at iteration"));
    assert!(message.contains(&format!("{:?}", failure.guess)));
    // the objective's message appears once, at the bottom of the chain
    assert!(!message.contains("diverged"));

    let error = std::error::Error::source(&failure).unwrap();
    assert!(error.to_string().starts_with("objective failed on guess"));
    let cause = error.source().unwrap();
    assert_eq!(cause.to_string(), "diverged");
    assert!(cause.source().is_none());
}

#[test]
fn failing_batch_still_scores_every_guess() {
    let calls = AtomicUsize::new(0);
    let optimizer = Optimizer::builder(1)
        .start(vec![0.0])
        .tiers(vec![64])
        .seed(13)
        .build()
        .unwrap();

    let failure = optimizer
        .optimize(|x: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            if x[0] == 0.0 {
                Ok(0.0)
            } else {
                Err("only the start is valid")
            }
        })
        .unwrap_err();

    assert_eq!(failure.iteration, 0);
    assert_eq!(failure.best, vec![0.0]);
    assert_eq!(calls.load(Ordering::SeqCst), 1 + 64);
}

#[test]
fn objective_error_at_start_fails_the_run() {
    let optimizer = Optimizer::builder(2).start(vec![3.0, 4.0]).build().unwrap();

    let failure = optimizer
        .optimize(|_: &[f64]| Err::<f64, _>("no dataset loaded"))
        .unwrap_err();

    assert_eq!(failure.iteration, 0);
    assert_eq!(failure.best, vec![3.0, 4.0]);
    assert_eq!(failure.best_score, None);
    assert_eq!(failure.guess_score, None);
}
