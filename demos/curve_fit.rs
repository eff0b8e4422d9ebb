//! Fit a logistic growth curve to noisy observations.
//!
//! Run with `cargo run --example curve_fit`.

use guesswork::metric::MseObjective;
use guesswork::{Bounds, Optimizer};

fn logistic(p: &[f64], t: f64) -> f64 {
    let (capacity, rate, midpoint) = (p[0], p[1], p[2]);
    capacity / (1.0 + (-rate * (t - midpoint)).exp())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let truth = [120.0, 0.8, 6.0];
    let mut rng = fastrand::Rng::with_seed(2);

    let ts: Vec<f64> = (0..40).map(|i| f64::from(i) * 0.3).collect();
    let observed: Vec<f64> = ts
        .iter()
        .map(|&t| logistic(&truth, t) + (rng.f64() - 0.5) * 4.0)
        .collect();

    let model = |p: &[f64], t: &f64| logistic(p, *t);
    let objective = MseObjective::from_columns(ts, observed, model)?;

    let optimizer = Optimizer::builder(3)
        .start(vec![50.0, 1.0, 1.0])
        .limits(vec![
            Bounds::new(0.0, 1000.0),
            Bounds::new(0.0, 10.0),
            Bounds::new(-20.0, 20.0),
        ])
        .steps(vec![10.0, 0.5, 1.0])
        .target(1e-9)
        .seed(42)
        .build()?;

    let solution = optimizer.optimize(objective)?;

    println!(
        "capacity = {:.3}, rate = {:.3}, midpoint = {:.3}",
        solution.best[0], solution.best[1], solution.best[2]
    );
    println!(
        "mse = {:.4} after {} iterations ({:?})",
        -solution.score, solution.iterations, solution.termination
    );
    Ok(())
}
