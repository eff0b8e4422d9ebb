use std::sync::atomic::{AtomicUsize, Ordering};

use guesswork::{Error, Optimizer, Termination};

#[test]
fn first_tier_success_skips_larger_tiers() {
    let calls = AtomicUsize::new(0);
    let optimizer = Optimizer::builder(1)
        .start(vec![0.0])
        .max_iterations(1)
        .seed(42)
        .sequential()
        .build()
        .unwrap();

    // any guess above the start improves, so the first tier of 32 succeeds
    let solution = optimizer
        .optimize(|x: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Error>(x[0])
        })
        .unwrap();

    assert_eq!(solution.iterations, 1);
    assert!(solution.score > 0.0);
    // one call for the starting vector, one per guess of the first tier
    assert_eq!(calls.load(Ordering::SeqCst), 1 + 32);
}

#[test]
fn every_tier_is_tried_without_improvement() {
    let calls = AtomicUsize::new(0);
    let optimizer = Optimizer::builder(2)
        .tiers(vec![32, 64, 128])
        .seed(5)
        .build()
        .unwrap();

    let solution = optimizer
        .optimize(|_: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Error>(0.0)
        })
        .unwrap();

    assert_eq!(solution.termination, Termination::Converged);
    assert_eq!(solution.iterations, 1);
    assert_eq!(solution.best, vec![1.0, 1.0]);
    assert_eq!(calls.load(Ordering::SeqCst), 1 + 32 + 64 + 128);
}

#[test]
fn escalates_until_a_tier_improves() {
    // only guesses very close to the upper edge of the step improve, so
    // small tiers usually fail and larger ones take over
    let calls = AtomicUsize::new(0);
    let optimizer = Optimizer::builder(1)
        .start(vec![0.0])
        .tiers(vec![1, 100_000])
        .max_iterations(1)
        .seed(8)
        .sequential()
        .build()
        .unwrap();

    let solution = optimizer
        .optimize(|x: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Error>(if x[0] > 0.499 { x[0] } else { 0.0 })
        })
        .unwrap();

    let calls = calls.load(Ordering::SeqCst);
    assert!(calls == 2 || calls == 2 + 100_000, "calls = {calls}");
    assert!(solution.best[0] > 0.499);
}

#[test]
fn empty_tiers_converge_immediately() {
    let optimizer = Optimizer::builder(1).tiers(Vec::new()).build().unwrap();

    let solution = optimizer
        .optimize(|x: &[f64]| Ok::<_, Error>(x[0]))
        .unwrap();

    assert_eq!(solution.termination, Termination::Converged);
    assert_eq!(solution.iterations, 1);
    assert_eq!(solution.best, vec![1.0]);
}
