//! Decay-weighted aggregation of a player's attempts.
//!
//! Each attempt contributes its decay weight `w` to the total; correct
//! attempts also contribute `w` to the correct count and `w * time` to the
//! time sum. Speed is therefore the decay-weighted mean of correct response
//! times. Fully decayed attempts (`w <= 0`) are skipped entirely.

use chrono::{DateTime, Utc};
use orient_core::types::{Attempt, WeightedStats};

use crate::decay::decay_weight;

/// Aggregate `attempts` as seen at `now`.
///
/// Returns [`WeightedStats::ZERO`] for empty or fully decayed input.
/// `accuracy_percent` and `speed_ms` are rounded to whole numbers.
pub fn weighted_stats(attempts: &[Attempt], now: DateTime<Utc>) -> WeightedStats {
    let mut weighted_total = 0.0f64;
    let mut weighted_correct = 0.0f64;
    let mut weighted_time_sum = 0.0f64;

    for attempt in attempts {
        let w = decay_weight(attempt.created_at, now);
        if w <= 0.0 {
            continue;
        }

        weighted_total += w;
        if attempt.is_correct {
            weighted_correct += w;
            weighted_time_sum += attempt.response_time_ms as f64 * w;
        }
    }

    let accuracy_percent = if weighted_total > 0.0 {
        (100.0 * weighted_correct / weighted_total).round() as u32
    } else {
        0
    };

    let speed_ms = if weighted_correct > 0.0 {
        (weighted_time_sum / weighted_correct).round() as u32
    } else {
        0
    };

    WeightedStats {
        accuracy_percent,
        speed_ms,
        effective_total: weighted_total,
        effective_correct: weighted_correct,
    }
}
