//! Mean squared error, for turning model fitting into an objective.
//!
//! The optimizer maximizes, so [`MseObjective`] scores a parameter vector
//! as the *negated* mean squared error of the model over a dataset.
//!
//! # Examples
//!
//! Fit the slope and intercept of a line:
//!
//! ```
//! use guesswork::metric::MseObjective;
//! use guesswork::Optimizer;
//!
//! let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
//!
//! let objective =
//!     MseObjective::from_columns(xs, ys, |p: &[f64], x: &f64| p[0] * x + p[1]).unwrap();
//!
//! let optimizer = Optimizer::builder(2).seed(5).build().unwrap();
//! let solution = optimizer.optimize(objective).unwrap();
//!
//! assert!((solution.best[0] - 2.0).abs() < 1e-2);
//! assert!((solution.best[1] + 1.0).abs() < 1e-2);
//! ```

use crate::error::{Error, Result};
use crate::objective::Objective;

/// A predicted value and the value actually observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair {
    /// The value produced by the model.
    pub predicted: f64,
    /// The observed value.
    pub observed: f64,
}

/// Running mean squared error over [`Pair`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeanSquaredError {
    sum: f64,
    count: usize,
}

impl MeanSquaredError {
    /// An empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one squared difference.
    pub fn update(&mut self, predicted: f64, observed: f64) {
        let diff = predicted - observed;
        self.sum += diff * diff;
        self.count += 1;
    }

    /// Sum of squared differences divided by their count.
    ///
    /// NaN while no pair has been added.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Number of pairs added since the last reset.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Forget every pair added so far.
    pub fn reset(&mut self) {
        self.sum = 0.0;
        self.count = 0;
    }

    /// Reset, then accumulate every pair and return the resulting error.
    pub fn over<I>(&mut self, pairs: I) -> f64
    where
        I: IntoIterator<Item = Pair>,
    {
        self.reset();
        for p in pairs {
            self.update(p.predicted, p.observed);
        }
        self.value()
    }
}

/// Pair up predictions with observations, element by element.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the slices differ in length.
///
/// # Examples
///
/// ```
/// use guesswork::metric::{MeanSquaredError, zip};
///
/// let mse = MeanSquaredError::new().over(zip(&[1.0, 2.0], &[1.0, 4.0]).unwrap());
/// assert_eq!(mse, 2.0);
///
/// assert!(zip(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
/// ```
pub fn zip<'a>(
    predicted: &'a [f64],
    observed: &'a [f64],
) -> Result<impl Iterator<Item = Pair> + 'a> {
    if predicted.len() != observed.len() {
        return Err(Error::LengthMismatch {
            left: predicted.len(),
            right: observed.len(),
        });
    }
    Ok(predicted
        .iter()
        .zip(observed)
        .map(|(&predicted, &observed)| Pair {
            predicted,
            observed,
        }))
}

/// One model input with the output observed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct IoPair<T> {
    /// The model input.
    pub input: T,
    /// The observed output.
    pub output: f64,
}

/// Run `model` over every input, pairing its prediction with the observed
/// output.
pub fn model_pairs<'a, T, M, I>(model: M, pairs: I) -> impl Iterator<Item = Pair> + 'a
where
    T: 'a,
    M: Fn(&T) -> f64 + 'a,
    I: IntoIterator<Item = &'a IoPair<T>>,
    I::IntoIter: 'a,
{
    pairs.into_iter().map(move |p| Pair {
        predicted: model(&p.input),
        observed: p.output,
    })
}

/// Scores a parameter vector as the negated mean squared error of `model`
/// over a fixed dataset.
///
/// `model` receives the parameters being fitted and one input.
#[derive(Clone, Debug)]
pub struct MseObjective<T, M> {
    data: Vec<IoPair<T>>,
    model: M,
}

impl<T, M> MseObjective<T, M>
where
    M: Fn(&[f64], &T) -> f64,
{
    /// Build from a dataset of input/output pairs.
    #[must_use]
    pub fn new(data: Vec<IoPair<T>>, model: M) -> Self {
        Self { data, model }
    }

    /// Build from separate input and output columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the columns differ in length.
    pub fn from_columns(inputs: Vec<T>, outputs: Vec<f64>, model: M) -> Result<Self> {
        if inputs.len() != outputs.len() {
            return Err(Error::LengthMismatch {
                left: inputs.len(),
                right: outputs.len(),
            });
        }
        let data = inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| IoPair { input, output })
            .collect();
        Ok(Self::new(data, model))
    }

    /// The dataset being fitted.
    #[must_use]
    pub fn data(&self) -> &[IoPair<T>] {
        &self.data
    }

    /// Mean squared error of the model with parameters `params`.
    #[must_use]
    pub fn mse(&self, params: &[f64]) -> f64 {
        MeanSquaredError::new().over(model_pairs(|x| (self.model)(params, x), &self.data))
    }
}

impl<T, M> Objective for MseObjective<T, M>
where
    T: Sync,
    M: Fn(&[f64], &T) -> f64 + Sync,
{
    type Error = Error;

    fn score(&self, args: &[f64]) -> Result<f64> {
        Ok(-self.mse(args))
    }
}
