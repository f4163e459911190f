//! Leaderboard views: the full ranked list, or the top rows plus a small
//! window around the viewing player.
//!
//! A windowed view always shows the top [`LEADERBOARD_TOP_N`]. When the
//! viewer ranks below that, a second segment holds the row just above the
//! viewer (unless it is already in the top segment), the viewer, and the row
//! just below (if any). Callers render a separator between the segments.

use orient_core::constants::LEADERBOARD_TOP_N;
use orient_core::traits::ScoreCalculator;
use orient_core::types::{LeaderboardEntry, PlayerEntry, SortDirection, SortField};
use serde::Serialize;
use tracing::debug;

use crate::ranking::rank;

/// What a leaderboard screen displays.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum LeaderboardView {
    /// Every ranked row.
    Full { ranked: Vec<LeaderboardEntry> },
    /// Top rows, plus the viewer's neighbourhood when the viewer is below them.
    Windowed {
        top: Vec<LeaderboardEntry>,
        user_window: Option<Vec<LeaderboardEntry>>,
    },
}

impl LeaderboardView {
    /// Number of rows across all segments.
    pub fn len(&self) -> usize {
        match self {
            Self::Full { ranked } => ranked.len(),
            Self::Windowed { top, user_window } => {
                top.len() + user_window.as_ref().map_or(0, Vec::len)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present the view in `direction`.
    ///
    /// Ranks never change; a direction opposite to the field's natural
    /// (best-first) one only reverses the rows. In a windowed view each
    /// segment is reversed in place and the top segment stays first.
    pub fn in_direction(self, field: SortField, direction: SortDirection) -> Self {
        if direction == field.natural_direction() {
            return self;
        }
        match self {
            Self::Full { mut ranked } => {
                ranked.reverse();
                Self::Full { ranked }
            }
            Self::Windowed { mut top, mut user_window } => {
                top.reverse();
                if let Some(window) = user_window.as_mut() {
                    window.reverse();
                }
                Self::Windowed { top, user_window }
            }
        }
    }
}

/// Cut a best-first ranked list into the view requested by the caller.
///
/// - `windowed == false`: the full list.
/// - viewer in the top rows, unknown, or not given: the top rows only.
/// - otherwise: the top rows and the viewer's window.
pub fn select_view(
    mut ranked: Vec<LeaderboardEntry>,
    viewing_user_id: Option<&str>,
    windowed: bool,
) -> LeaderboardView {
    if !windowed {
        return LeaderboardView::Full { ranked };
    }

    let position =
        viewing_user_id.and_then(|id| ranked.iter().position(|e| e.player.user_id == id));

    let user_window = match position {
        Some(index) if index >= LEADERBOARD_TOP_N => {
            // The row above is only repeated when it is not already on top.
            let start = if index - 1 >= LEADERBOARD_TOP_N { index - 1 } else { index };
            let end = (index + 2).min(ranked.len());
            Some(ranked[start..end].to_vec())
        }
        Some(_) => None,
        None => {
            if let Some(id) = viewing_user_id {
                debug!(user_id = id, "leaderboard: viewer not ranked, showing top only");
            }
            None
        }
    };

    ranked.truncate(LEADERBOARD_TOP_N);
    LeaderboardView::Windowed {
        top: ranked,
        user_window,
    }
}

/// Rank `entries` by `field` and select the view for `viewing_user_id`.
pub fn rank_entries(
    entries: Vec<PlayerEntry>,
    field: SortField,
    viewing_user_id: Option<&str>,
    windowed: bool,
    calculator: &dyn ScoreCalculator,
) -> LeaderboardView {
    let count = entries.len();
    let ranked = rank(entries, field, calculator);
    debug!(%field, count, windowed, "leaderboard: ranked entries");
    select_view(ranked, viewing_user_id, windowed)
}
