//! Trait interfaces between crates.
//!
//! - [`ScoreCalculator`]: decay and scoring math (orient-score implements,
//!   orient-board consumes)

use chrono::{DateTime, Utc};

use crate::types::{Attempt, WeightedStats};

/// Pure computation of attempt weights, aggregated stats and ranking scores.
///
/// Every method is total: degenerate input yields zeros rather than errors.
/// Implementations must be deterministic for a given `now`.
pub trait ScoreCalculator: Send + Sync {
    /// Weight in `[0, 1]` of an attempt made at `created_at`, seen at `now`.
    fn decay_weight(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64;

    /// Multiplier for an accuracy percentage. Exactly 1.0 at the baseline.
    fn accuracy_multiplier(&self, accuracy_percent: f64) -> f64;

    /// Fold a player's attempts into decay-weighted accuracy and speed.
    fn weighted_stats(&self, attempts: &[Attempt], now: DateTime<Utc>) -> WeightedStats;

    /// Single ranking scalar from accuracy and average correct-answer speed.
    ///
    /// Returns 0 when `speed_ms` is 0 (no correct answers).
    fn combined_score(&self, accuracy_percent: f64, speed_ms: f64) -> f64;

    /// Combined score straight from attempts.
    ///
    /// Default implementation composes [`weighted_stats`](Self::weighted_stats)
    /// with [`combined_score`](Self::combined_score) on the rounded stats.
    fn weighted_combined_score(&self, attempts: &[Attempt], now: DateTime<Utc>) -> f64 {
        let stats = self.weighted_stats(attempts, now);
        self.combined_score(stats.accuracy_percent as f64, stats.speed_ms as f64)
    }
}
