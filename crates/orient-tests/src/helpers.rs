//! Shared fixtures for integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use orient_core::types::{AttemptRow, PlayerEntry, PlayerProfile};

/// Fixed evaluation instant so decay is reproducible.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Instant `days` before [`now`].
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// A correct answer row.
pub fn hit(user_id: &str, response_time_ms: i64, age_days: i64) -> AttemptRow {
    AttemptRow {
        user_id: user_id.to_string(),
        map_id: None,
        is_correct: true,
        response_time_ms,
        created_at: days_ago(age_days),
    }
}

/// A wrong answer row.
pub fn miss(user_id: &str, age_days: i64) -> AttemptRow {
    AttemptRow {
        user_id: user_id.to_string(),
        map_id: None,
        is_correct: false,
        response_time_ms: 0,
        created_at: days_ago(age_days),
    }
}

/// Same row, recorded on `map_id`.
pub fn on_map(mut row: AttemptRow, map_id: &str) -> AttemptRow {
    row.map_id = Some(map_id.to_string());
    row
}

/// `correct` hits at `response_time_ms` plus `wrong` misses, all `age_days` old.
pub fn session(user_id: &str, correct: usize, wrong: usize, response_time_ms: i64, age_days: i64) -> Vec<AttemptRow> {
    let mut rows: Vec<AttemptRow> = (0..correct)
        .map(|_| hit(user_id, response_time_ms, age_days))
        .collect();
    rows.extend((0..wrong).map(|_| miss(user_id, age_days)));
    rows
}

pub fn profile(user_id: &str, display_name: &str, previous_rank: Option<u32>) -> PlayerProfile {
    PlayerProfile {
        user_id: user_id.to_string(),
        display_name: display_name.to_string(),
        profile_image_ref: Some(format!("avatars/{user_id}.webp")),
        previous_rank,
    }
}

/// An unranked row with the given stats.
pub fn player(user_id: &str, accuracy_percent: u32, speed_ms: u32) -> PlayerEntry {
    PlayerEntry {
        user_id: user_id.to_string(),
        display_name: user_id.to_string(),
        accuracy_percent,
        speed_ms,
        previous_rank: None,
        profile_image_ref: None,
    }
}
