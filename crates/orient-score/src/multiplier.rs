//! Exponential accuracy multiplier.
//!
//! `multiplier(a) = exp((clamp(a, 0, 100) - 50) * k)` with `k = 0.035`.
//! At 50% (coin-flip accuracy on a two-way route choice) the multiplier is
//! exactly 1.0. Above it grows faster than linear; below it shrinks towards
//! but never reaches zero, so a combined score is never negative.

use orient_core::constants::{
    ACCURACY_BASELINE_PERCENT, ACCURACY_MULTIPLIER_K, MAX_ACCURACY_PERCENT,
};

/// Multiplier for an accuracy percentage.
///
/// Input is clamped to `[0, 100]`; NaN is treated as 0.
///
/// # Examples
///
/// ```
/// use orient_score::multiplier::accuracy_multiplier;
/// assert_eq!(accuracy_multiplier(50.0), 1.0);
/// assert!(accuracy_multiplier(90.0) > accuracy_multiplier(60.0));
/// ```
pub fn accuracy_multiplier(accuracy_percent: f64) -> f64 {
    let clamped = if accuracy_percent.is_nan() {
        0.0
    } else {
        accuracy_percent.clamp(0.0, MAX_ACCURACY_PERCENT)
    };
    let shifted = clamped - ACCURACY_BASELINE_PERCENT;
    (shifted * ACCURACY_MULTIPLIER_K).exp()
}
