//! Time decay of attempt weight.
//!
//! Recent play should dominate a player's standing, so every attempt's
//! contribution fades with age:
//! - up to [`DECAY_FULL_WEIGHT_DAYS`]: full weight (1.0)
//! - from there to [`DECAY_RETIRED_DAYS`]: linearly down to 0.0
//! - at or beyond [`DECAY_RETIRED_DAYS`]: 0.0, the attempt is excluded

use chrono::{DateTime, Utc};
use orient_core::constants::{
    DECAY_FULL_WEIGHT_DAYS, DECAY_RAMP_DAYS, DECAY_RETIRED_DAYS, MS_PER_DAY,
};

/// Age of an attempt in fractional days.
///
/// Negative when `created_at` lies after `now`.
pub fn age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / MS_PER_DAY
}

/// Weight for an attempt that is `age_days` old.
///
/// Returns a value in `[0.0, 1.0]`. Ages at or below zero count in full.
pub fn decay_factor(age_days: f64) -> f64 {
    if age_days <= DECAY_FULL_WEIGHT_DAYS {
        return 1.0;
    }
    if age_days >= DECAY_RETIRED_DAYS {
        return 0.0;
    }
    1.0 - (age_days - DECAY_FULL_WEIGHT_DAYS) / DECAY_RAMP_DAYS
}

/// Weight of an attempt made at `created_at`, evaluated at `now`.
///
/// Precondition: both are valid instants and `created_at <= now`. A
/// timestamp from the future has a negative age and gets full weight.
pub fn decay_weight(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    decay_factor(age_days(created_at, now))
}
