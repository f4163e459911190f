//! Score engine implementing the [`ScoreCalculator`] trait.
//!
//! The combined score is `1000 / max(speed_ms, 1) * accuracy_multiplier(accuracy)`.
//! Speed separates players of similar accuracy; the multiplier dominates
//! at the extremes.

use chrono::{DateTime, Utc};
use orient_core::constants::SPEED_SCORE_SCALE;
use orient_core::traits::ScoreCalculator;
use orient_core::types::{Attempt, WeightedStats};

use crate::decay::decay_weight;
use crate::multiplier::accuracy_multiplier;
use crate::stats::weighted_stats;

/// Combined ranking score from accuracy and average correct-answer speed.
///
/// A `speed_ms` of 0 means there is no speed signal and yields 0.
///
/// # Examples
///
/// ```
/// use orient_score::combined_score;
/// assert_eq!(combined_score(50.0, 1000.0), 1.0);
/// assert_eq!(combined_score(100.0, 0.0), 0.0);
/// ```
pub fn combined_score(accuracy_percent: f64, speed_ms: f64) -> f64 {
    if speed_ms == 0.0 {
        return 0.0;
    }
    let base_score = SPEED_SCORE_SCALE / speed_ms.max(1.0);
    base_score * accuracy_multiplier(accuracy_percent)
}

/// Combined score of already aggregated stats.
pub fn stats_score(stats: &WeightedStats) -> f64 {
    combined_score(stats.accuracy_percent as f64, stats.speed_ms as f64)
}

/// Combined score straight from attempts, composed from the rounded stats.
pub fn weighted_combined_score(attempts: &[Attempt], now: DateTime<Utc>) -> f64 {
    stats_score(&weighted_stats(attempts, now))
}

/// The production score calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    /// Create a new ScoreEngine.
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for ScoreEngine {
    fn decay_weight(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        decay_weight(created_at, now)
    }

    fn accuracy_multiplier(&self, accuracy_percent: f64) -> f64 {
        accuracy_multiplier(accuracy_percent)
    }

    fn weighted_stats(&self, attempts: &[Attempt], now: DateTime<Utc>) -> WeightedStats {
        weighted_stats(attempts, now)
    }

    fn combined_score(&self, accuracy_percent: f64, speed_ms: f64) -> f64 {
        combined_score(accuracy_percent, speed_ms)
    }
}
