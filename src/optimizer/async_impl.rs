use crate::error::Error;
use crate::objective::Objective;

use super::{Failure, Optimizer, Solution};

impl Optimizer {
    /// Run [`optimize`](Self::optimize) on tokio's blocking thread pool.
    ///
    /// The whole run happens inside
    /// [`spawn_blocking`](tokio::task::spawn_blocking), keeping the async
    /// runtime responsive while batches are scored. Batches still fan out
    /// over rayon as configured.
    ///
    /// # Errors
    ///
    /// Returns the same [`Failure`] as [`optimize`](Self::optimize). If the
    /// blocking task panics or is cancelled, the failure wraps
    /// `Error::TaskError` and carries the configured starting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use guesswork::{Error, Optimizer};
    ///
    /// # #[cfg(feature = "async")]
    /// # async fn example() -> Result<(), guesswork::Failure> {
    /// let optimizer = Optimizer::builder(1).seed(3).build().unwrap();
    /// let solution = optimizer
    ///     .optimize_async(|x: &[f64]| Ok::<_, Error>(-(x[0] - 2.0).powi(2)))
    ///     .await?;
    /// assert!((solution.best[0] - 2.0).abs() < 1e-3);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn optimize_async<O>(self, objective: O) -> Result<Solution, Failure>
    where
        O: Objective + Send + 'static,
    {
        let start = self.start.clone();
        tokio::task::spawn_blocking(move || self.optimize(objective))
            .await
            .unwrap_or_else(|e| {
                trace_debug!("optimization task failed");
                Err(Failure {
                    best: start.clone(),
                    best_score: None,
                    iteration: 0,
                    guess: start,
                    guess_score: None,
                    error: Box::new(Error::TaskError(e.to_string())),
                })
            })
    }
}
