//! # orient-board: Route-choice leaderboards.
//!
//! # Modules
//!
//! - [`builder`]: attempt rows → unranked rows per qualified player
//! - [`ranking`]: stable best-first ranking by accuracy, speed or combined score
//! - [`window`]: full or windowed views, display direction
//! - [`rank_change`]: movement since the last combined-leaderboard snapshot

pub mod builder;
pub mod rank_change;
pub mod ranking;
pub mod window;

pub use builder::{build_entries, group_attempts, stats_for_user, PlayerAttempts};
pub use rank_change::{entry_rank_change, rank_change, RankChange};
pub use ranking::{entry_score, rank, sort_entries};
pub use window::{rank_entries, select_view, LeaderboardView};
