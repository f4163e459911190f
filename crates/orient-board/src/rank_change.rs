//! Movement indicator between a snapshot rank and the current rank.
//!
//! Snapshots are only taken of the combined leaderboard, so other fields
//! always report [`RankChange::Unchanged`].

use std::fmt;

use orient_core::types::{LeaderboardEntry, SortField};
use serde::Serialize;

/// How a player moved since the last snapshot. Positions are always positive.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "change", content = "positions", rename_all = "snake_case")]
pub enum RankChange {
    Unchanged,
    Improved(u32),
    Declined(u32),
}

impl fmt::Display for RankChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => f.write_str("-"),
            Self::Improved(n) => write!(f, "+{n}"),
            Self::Declined(n) => write!(f, "-{n}"),
        }
    }
}

/// Compare `current_rank` against an optional `previous_rank` for `field`.
///
/// # Examples
///
/// ```
/// use orient_board::{rank_change, RankChange};
/// use orient_core::types::SortField;
///
/// assert_eq!(rank_change(SortField::Combined, 3, Some(7)), RankChange::Improved(4));
/// assert_eq!(rank_change(SortField::Speed, 3, Some(7)), RankChange::Unchanged);
/// ```
pub fn rank_change(field: SortField, current_rank: u32, previous_rank: Option<u32>) -> RankChange {
    if field != SortField::Combined {
        return RankChange::Unchanged;
    }
    match previous_rank {
        None => RankChange::Unchanged,
        Some(previous) if previous == current_rank => RankChange::Unchanged,
        Some(previous) if previous > current_rank => RankChange::Improved(previous - current_rank),
        Some(previous) => RankChange::Declined(current_rank - previous),
    }
}

/// Rank change of a ranked row, using its own snapshot rank.
pub fn entry_rank_change(entry: &LeaderboardEntry, field: SortField) -> RankChange {
    rank_change(field, entry.rank, entry.player.previous_rank)
}
