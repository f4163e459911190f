//! Turn raw attempt rows into unranked leaderboard rows.
//!
//! Rows are validated at this boundary; malformed ones are logged and
//! skipped so that one corrupt row cannot hide a whole leaderboard. Players
//! keep the order in which they first appear in the input, which is the
//! order ties fall back to when ranking.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use orient_core::traits::ScoreCalculator;
use orient_core::types::{Attempt, AttemptRow, PlayerEntry, PlayerProfile, WeightedStats};
use tracing::{debug, warn};

/// Attempts of one player, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAttempts<'a> {
    pub user_id: &'a str,
    pub attempts: Vec<Attempt>,
}

/// Group valid rows by user, keeping first-seen user order.
///
/// With `map_filter` set, only rows recorded on that map are kept.
pub fn group_attempts<'a>(rows: &'a [AttemptRow], map_filter: Option<&str>) -> Vec<PlayerAttempts<'a>> {
    let mut groups: Vec<PlayerAttempts<'a>> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut rejected = 0usize;

    for row in rows.iter().filter(|r| r.matches_map(map_filter)) {
        let attempt = match row.validate() {
            Ok(attempt) => attempt,
            Err(err) => {
                rejected += 1;
                warn!(user_id = %row.user_id, %err, "builder: skipping invalid attempt row");
                continue;
            }
        };

        let slot = *slots.entry(row.user_id.as_str()).or_insert_with(|| {
            groups.push(PlayerAttempts {
                user_id: row.user_id.as_str(),
                attempts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].attempts.push(attempt);
    }

    debug!(
        rows = rows.len(),
        players = groups.len(),
        rejected,
        map = map_filter.unwrap_or("*"),
        "builder: grouped attempt rows"
    );
    groups
}

/// Build one unranked row per qualified player.
///
/// Players whose attempts have all decayed away (or who have none on the
/// filtered map) are not qualified and get no row.
pub fn build_entries(
    rows: &[AttemptRow],
    profiles: &[PlayerProfile],
    map_filter: Option<&str>,
    now: DateTime<Utc>,
    calculator: &dyn ScoreCalculator,
) -> Vec<PlayerEntry> {
    let profiles_by_id: HashMap<&str, &PlayerProfile> =
        profiles.iter().map(|p| (p.user_id.as_str(), p)).collect();

    group_attempts(rows, map_filter)
        .into_iter()
        .filter_map(|group| {
            let stats = calculator.weighted_stats(&group.attempts, now);
            if !stats.is_qualified() {
                debug!(user_id = group.user_id, "builder: player not qualified");
                return None;
            }
            let profile = profiles_by_id.get(group.user_id).copied();
            Some(PlayerEntry::from_stats(group.user_id, &stats, profile))
        })
        .collect()
}

/// Weighted stats of a single player, from the same rows a leaderboard uses.
pub fn stats_for_user(
    rows: &[AttemptRow],
    user_id: &str,
    map_filter: Option<&str>,
    now: DateTime<Utc>,
    calculator: &dyn ScoreCalculator,
) -> WeightedStats {
    group_attempts(rows, map_filter)
        .into_iter()
        .find(|group| group.user_id == user_id)
        .map(|group| calculator.weighted_stats(&group.attempts, now))
        .unwrap_or(WeightedStats::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use orient_score::ScoreEngine;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn row(user_id: &str, map_id: Option<&str>, is_correct: bool, ms: i64, days_ago: i64) -> AttemptRow {
        AttemptRow {
            user_id: user_id.to_string(),
            map_id: map_id.map(str::to_string),
            is_correct,
            response_time_ms: ms,
            created_at: now() - Duration::days(days_ago),
        }
    }

    fn profile(user_id: &str, name: &str, previous_rank: Option<u32>) -> PlayerProfile {
        PlayerProfile {
            user_id: user_id.to_string(),
            display_name: name.to_string(),
            profile_image_ref: None,
            previous_rank,
        }
    }

    // --- group_attempts ---

    #[test]
    fn groups_in_first_seen_order() {
        let rows = vec![
            row("b", None, true, 500, 1),
            row("a", None, true, 600, 1),
            row("b", None, false, 0, 2),
        ];
        let groups = group_attempts(&rows, None);
        let ids: Vec<&str> = groups.iter().map(|g| g.user_id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(groups[0].attempts.len(), 2);
        assert_eq!(groups[1].attempts.len(), 1);
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let rows = vec![
            row("a", None, true, -40, 1),
            row("", None, true, 500, 1),
            row("a", None, true, 500, 1),
        ];
        let groups = group_attempts(&rows, None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].attempts, vec![Attempt::correct(500, now() - Duration::days(1))]);
    }

    #[test]
    fn map_filter_keeps_only_that_map() {
        let rows = vec![
            row("a", Some("forest"), true, 500, 1),
            row("a", Some("sprint"), false, 0, 1),
            row("b", None, true, 700, 1),
        ];
        let groups = group_attempts(&rows, Some("forest"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].user_id, "a");
        assert_eq!(groups[0].attempts.len(), 1);
    }

    // --- build_entries ---

    #[test]
    fn builds_entries_with_profiles() {
        let rows = vec![
            row("a", None, true, 1000, 1),
            row("a", None, false, 0, 1),
            row("b", None, true, 800, 3),
        ];
        let profiles = vec![profile("a", "Astrid", Some(2))];
        let entries = build_entries(&rows, &profiles, None, now(), &ScoreEngine);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_name, "Astrid");
        assert_eq!(entries[0].accuracy_percent, 50);
        assert_eq!(entries[0].speed_ms, 1000);
        assert_eq!(entries[0].previous_rank, Some(2));
        assert_eq!(entries[1].display_name, "b");
        assert_eq!(entries[1].accuracy_percent, 100);
    }

    #[test]
    fn fully_decayed_players_are_dropped() {
        let rows = vec![row("old", None, true, 400, 200), row("new", None, true, 900, 2)];
        let entries = build_entries(&rows, &[], None, now(), &ScoreEngine);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, "new");
    }

    #[test]
    fn players_with_only_wrong_answers_still_qualify() {
        let rows = vec![row("w", None, false, 0, 1)];
        let entries = build_entries(&rows, &[], None, now(), &ScoreEngine);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].speed_ms, 0);
        assert_eq!(entries[0].accuracy_percent, 0);
    }

    // --- stats_for_user ---

    #[test]
    fn stats_for_known_user() {
        let rows = vec![row("a", None, true, 1000, 1), row("a", None, false, 0, 1)];
        let stats = stats_for_user(&rows, "a", None, now(), &ScoreEngine);
        assert_eq!(stats.accuracy_percent, 50);
        assert_eq!(stats.speed_ms, 1000);
    }

    #[test]
    fn stats_for_unknown_user_is_zero() {
        let rows = vec![row("a", None, true, 1000, 1)];
        assert_eq!(
            stats_for_user(&rows, "nobody", None, now(), &ScoreEngine),
            WeightedStats::ZERO
        );
    }
}
