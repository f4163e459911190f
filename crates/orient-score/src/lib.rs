//! # orient-score: Decay-weighted scoring of route-choice attempts.
//!
//! - **Time decay**: attempts count in full for 30 days, then fade linearly
//!   to nothing at 120 days.
//! - **Accuracy multiplier**: `exp((accuracy - 50) * 0.035)`, exactly 1.0 at
//!   coin-flip accuracy.
//! - **Weighted stats**: decay-weighted accuracy and mean correct-answer speed.
//! - **Combined score**: `1000 / speed_ms * multiplier`, the leaderboard's
//!   default ordering.

pub mod decay;
pub mod engine;
pub mod multiplier;
pub mod stats;

pub use decay::decay_weight;
pub use engine::{combined_score, stats_score, weighted_combined_score, ScoreEngine};
pub use multiplier::accuracy_multiplier;
pub use stats::weighted_stats;
