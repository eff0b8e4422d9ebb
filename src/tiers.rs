//! Replicate tiers: the batch sizes tried, in order, within one iteration.

/// Smallest batch in the default tier sequence.
pub const FIRST_TIER: usize = 32;

/// Ceiling used by [`default_tiers`].
pub const DEFAULT_TIER_CEILING: usize = 10_000;

/// Powers of two starting at [`FIRST_TIER`], doubling while they stay at
/// or below `ceiling`.
///
/// The first tier is always present, even when `ceiling` is smaller.
///
/// # Examples
///
/// ```
/// use guesswork::replicate_tiers;
///
/// assert_eq!(replicate_tiers(256), vec![32, 64, 128, 256]);
/// assert_eq!(replicate_tiers(300), vec![32, 64, 128, 256]);
/// assert_eq!(replicate_tiers(1), vec![32]);
/// ```
#[must_use]
pub fn replicate_tiers(ceiling: usize) -> Vec<usize> {
    let mut tiers = vec![FIRST_TIER];
    let mut next = FIRST_TIER * 2;
    while next <= ceiling {
        tiers.push(next);
        match next.checked_mul(2) {
            Some(doubled) => next = doubled,
            None => break,
        }
    }
    tiers
}

/// The default tiers: 32, 64, ..., 8192.
#[must_use]
pub fn default_tiers() -> Vec<usize> {
    replicate_tiers(DEFAULT_TIER_CEILING)
}
