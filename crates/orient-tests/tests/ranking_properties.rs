//! Property tests for ranking determinism, tie stability and windowing.

use std::collections::HashMap;

use orient_board::{rank, rank_entries, LeaderboardView};
use orient_core::constants::LEADERBOARD_TOP_N;
use orient_core::types::{PlayerEntry, SortField};
use orient_score::ScoreEngine;
use orient_tests::helpers::player;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Players with pairwise distinct combined scores: equal accuracy, distinct speeds.
fn distinct_players() -> impl Strategy<Value = Vec<PlayerEntry>> {
    prop::collection::hash_set(1u32..20_000, 1..40).prop_map(|speeds| {
        speeds
            .into_iter()
            .enumerate()
            .map(|(i, ms)| player(&format!("u{i}"), 70, ms))
            .collect()
    })
}

fn rank_by_user(entries: Vec<PlayerEntry>) -> HashMap<String, u32> {
    rank(entries, SortField::Combined, &ScoreEngine)
        .into_iter()
        .map(|e| (e.player.user_id, e.rank))
        .collect()
}

proptest! {
    #[test]
    fn rank_independent_of_input_order(entries in distinct_players(), seed in any::<u64>()) {
        let mut shuffled = entries.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(rank_by_user(entries), rank_by_user(shuffled));
    }

    #[test]
    fn exact_ties_keep_relative_order(others in distinct_players(), seed in any::<u64>()) {
        // Three identical rows, inserted in order tie_a, tie_b, tie_c.
        let mut entries = others;
        entries.shuffle(&mut StdRng::seed_from_u64(seed));
        let len = entries.len();
        entries.insert(0, player("tie_a", 90, 777));
        entries.insert(len / 2 + 1, player("tie_b", 90, 777));
        entries.push(player("tie_c", 90, 777));

        let ranked = rank(entries, SortField::Combined, &ScoreEngine);
        let tie_order: Vec<&str> = ranked
            .iter()
            .map(|e| e.player.user_id.as_str())
            .filter(|id| id.starts_with("tie_"))
            .collect();
        prop_assert_eq!(tie_order, vec!["tie_a", "tie_b", "tie_c"]);
    }

    #[test]
    fn windowed_view_never_duplicates_rows(entries in distinct_players(), pick in any::<prop::sample::Index>()) {
        let viewer = entries[pick.index(entries.len())].user_id.clone();
        let view = rank_entries(entries, SortField::Combined, Some(viewer.as_str()), true, &ScoreEngine);

        let LeaderboardView::Windowed { top, user_window } = view else {
            panic!("expected windowed view");
        };
        prop_assert!(top.len() <= LEADERBOARD_TOP_N);

        let mut seen: Vec<u32> = top.iter().map(|e| e.rank).collect();
        let in_top = top.iter().any(|e| e.player.user_id == viewer);
        match user_window {
            Some(window) => {
                prop_assert!(!in_top);
                prop_assert!(window.iter().any(|e| e.player.user_id == viewer));
                prop_assert!(window.len() <= 3);
                seen.extend(window.iter().map(|e| e.rank));
            }
            None => prop_assert!(in_top),
        }
        let mut deduped = seen.clone();
        deduped.dedup();
        prop_assert_eq!(seen, deduped);
    }
}
