//! Scoring constants. Ages are in days, times in milliseconds.

/// Milliseconds in one day, used to turn timestamp differences into fractional days.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Attempts up to this age (inclusive) count at full weight.
pub const DECAY_FULL_WEIGHT_DAYS: f64 = 30.0;

/// Attempts at or beyond this age carry no weight and are excluded.
pub const DECAY_RETIRED_DAYS: f64 = 120.0;

/// Length of the linear ramp between full weight and retirement.
pub const DECAY_RAMP_DAYS: f64 = DECAY_RETIRED_DAYS - DECAY_FULL_WEIGHT_DAYS;

/// Accuracy (percent) that maps to a multiplier of exactly 1.0.
///
/// Route choice is a binary left/right pick, so 50% is what guessing earns.
///
/// # Examples
///
/// ```
/// use orient_core::constants::ACCURACY_BASELINE_PERCENT;
/// assert_eq!(ACCURACY_BASELINE_PERCENT, 50.0);
/// ```
pub const ACCURACY_BASELINE_PERCENT: f64 = 50.0;

/// Exponent slope of the accuracy multiplier, per percentage point.
pub const ACCURACY_MULTIPLIER_K: f64 = 0.035;

/// Upper bound of an accuracy percentage.
pub const MAX_ACCURACY_PERCENT: f64 = 100.0;

/// Numerator of the speed component: `SPEED_SCORE_SCALE / speed_ms`.
///
/// A player answering correctly in one second on average with 50% accuracy
/// scores exactly 1.0.
pub const SPEED_SCORE_SCALE: f64 = 1000.0;

/// Number of rows shown before the viewer's context window.
pub const LEADERBOARD_TOP_N: usize = 10;
