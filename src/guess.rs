//! Random perturbation of a base vector.

use parking_lot::Mutex;

use crate::bounds::Bounds;

/// Fills `dst` with a perturbed copy of `base`.
///
/// Each dimension becomes `base[i] + (u - 0.5) * steps[i]` with `u` drawn
/// uniformly from `[0, 1)`, then clamped into `limits[i]`. Draws happen in
/// dimension order so a seeded RNG reproduces the same guess. `dst` is
/// cleared first and its allocation reused.
///
/// `steps` and `limits` must be at least as long as `base`.
pub(crate) fn make_guess(
    dst: &mut Vec<f64>,
    base: &[f64],
    steps: &[f64],
    limits: &[Bounds],
    rng: &mut fastrand::Rng,
) {
    dst.clear();
    dst.extend(
        base.iter()
            .zip(steps)
            .zip(limits)
            .map(|((&x, &step), bounds)| {
                let roll = rng.f64() - 0.5;
                bounds.clamp(x + roll * step)
            }),
    );
}

/// Like [`make_guess`], holding `rng` locked only while drawing.
pub(crate) fn make_guess_locked(
    dst: &mut Vec<f64>,
    base: &[f64],
    steps: &[f64],
    limits: &[Bounds],
    rng: &Mutex<fastrand::Rng>,
) {
    let mut rng = rng.lock();
    make_guess(dst, base, steps, limits, &mut rng);
}
