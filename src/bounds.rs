//! Per-dimension box limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive `[lower, upper]` limits for one dimension of the search.
///
/// The optimizer expects `lower <= upper` and does not check it. Guesses are
/// clamped into the range after perturbation.
///
/// # Examples
///
/// ```
/// use guesswork::Bounds;
///
/// let b = Bounds::new(1.0, 8.0);
/// assert_eq!(b.clamp(0.5), 1.0);
/// assert_eq!(b.clamp(9.0), 8.0);
/// assert_eq!(b.clamp(4.0), 4.0);
/// assert_eq!(Bounds::default(), Bounds::UNBOUNDED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The smallest allowed value.
    pub lower: f64,
    /// The largest allowed value.
    pub upper: f64,
}

impl Bounds {
    /// Limits that admit every finite value.
    pub const UNBOUNDED: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    /// Creates limits for the closed range `[lower, upper]`.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Clamps `value` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics: with inverted limits the
    /// upper limit wins.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if value < self.lower {
            value = self.lower;
        }
        if value > self.upper {
            value = self.upper;
        }
        value
    }

    /// Returns true if `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// Returns `n` unbounded limits.
#[must_use]
pub fn unbounded(n: usize) -> Vec<Bounds> {
    vec![Bounds::UNBOUNDED; n]
}
