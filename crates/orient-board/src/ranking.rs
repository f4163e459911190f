//! Stable ranking of leaderboard rows by a chosen field.
//!
//! - `accuracy`: highest accuracy first
//! - `speed`: lowest average time first; players without a speed (0) last
//! - `combined`: highest combined score first
//!
//! Sorting is stable and uses no secondary key, so rows with equal values
//! keep their input order. Ranks are `index + 1` over the sorted sequence:
//! tied rows get consecutive ranks, not equal ones.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use orient_core::traits::ScoreCalculator;
use orient_core::types::{LeaderboardEntry, PlayerEntry, SortField};

/// Combined score of a row under `calculator`.
pub fn entry_score(entry: &PlayerEntry, calculator: &dyn ScoreCalculator) -> f64 {
    calculator.combined_score(entry.accuracy_percent as f64, entry.speed_ms as f64)
}

/// Sort `entries` best-first by `field` in place. Stable.
pub fn sort_entries(entries: &mut [PlayerEntry], field: SortField, calculator: &dyn ScoreCalculator) {
    match field {
        SortField::Accuracy => entries.sort_by_key(|e| Reverse(e.accuracy_percent)),
        // (false, ms) sorts before (true, _): a missing speed acts as +infinity.
        SortField::Speed => entries.sort_by_key(|e| (e.speed_ms == 0, e.speed_ms)),
        SortField::Combined => {
            entries.sort_by_cached_key(|e| Reverse(OrderedFloat(entry_score(e, calculator))))
        }
    }
}

/// Sort `entries` by `field` and assign dense 1-based ranks.
pub fn rank(
    mut entries: Vec<PlayerEntry>,
    field: SortField,
    calculator: &dyn ScoreCalculator,
) -> Vec<LeaderboardEntry> {
    sort_entries(&mut entries, field, calculator);
    entries
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardEntry {
            rank: index as u32 + 1,
            player,
        })
        .collect()
}
