//! Domain types: attempts, aggregated stats, leaderboard rows.
//!
//! Percentages are whole numbers in `[0, 100]` and times are whole
//! milliseconds once they leave the aggregator. A `speed_ms` of 0 means the
//! player has no correct answers and therefore no speed signal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AttemptError, ParseFieldError};

/// One answered route-choice trial.
///
/// `response_time_ms` only carries meaning when `is_correct` is true.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub is_correct: bool,
    pub response_time_ms: u32,
    pub created_at: DateTime<Utc>,
}

impl Attempt {
    /// A correct answer given after `response_time_ms`.
    pub fn correct(response_time_ms: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            is_correct: true,
            response_time_ms,
            created_at,
        }
    }

    /// A wrong answer. The response time is irrelevant and stored as 0.
    pub fn incorrect(created_at: DateTime<Utc>) -> Self {
        Self {
            is_correct: false,
            response_time_ms: 0,
            created_at,
        }
    }
}

/// An attempt row as it comes out of storage, before validation.
///
/// `response_time_ms` is kept signed so that malformed rows can be detected
/// and reported instead of failing deserialization of a whole export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttemptRow {
    pub user_id: String,
    #[serde(default)]
    pub map_id: Option<String>,
    pub is_correct: bool,
    #[serde(default)]
    pub response_time_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AttemptRow {
    /// Check the row and convert it into a typed [`Attempt`].
    ///
    /// Response times of incorrect answers are still range-checked: a negative
    /// value means the row is corrupt regardless of correctness.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use orient_core::error::AttemptError;
    /// use orient_core::types::AttemptRow;
    ///
    /// let row = AttemptRow {
    ///     user_id: "u1".into(),
    ///     map_id: None,
    ///     is_correct: true,
    ///     response_time_ms: -5,
    ///     created_at: Utc::now(),
    /// };
    /// assert_eq!(row.validate(), Err(AttemptError::NegativeResponseTime(-5)));
    /// ```
    pub fn validate(&self) -> Result<Attempt, AttemptError> {
        if self.user_id.trim().is_empty() {
            return Err(AttemptError::EmptyUserId);
        }
        if self.response_time_ms < 0 {
            return Err(AttemptError::NegativeResponseTime(self.response_time_ms));
        }
        let response_time_ms = u32::try_from(self.response_time_ms)
            .map_err(|_| AttemptError::ResponseTimeOutOfRange(self.response_time_ms))?;

        Ok(Attempt {
            is_correct: self.is_correct,
            response_time_ms,
            created_at: self.created_at,
        })
    }

    /// Whether this row belongs to `map_id`. `None` matches every row.
    pub fn matches_map(&self, map_id: Option<&str>) -> bool {
        match map_id {
            Some(wanted) => self.map_id.as_deref() == Some(wanted),
            None => true,
        }
    }
}

/// Decay-weighted aggregate of one player's attempts.
///
/// Invariant: `effective_correct <= effective_total`, and
/// `accuracy_percent == round(100 * effective_correct / effective_total)`
/// whenever `effective_total > 0`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct WeightedStats {
    pub accuracy_percent: u32,
    pub speed_ms: u32,
    /// Sum of decay weights over all counted attempts.
    pub effective_total: f64,
    /// Sum of decay weights over counted correct attempts.
    pub effective_correct: f64,
}

impl WeightedStats {
    /// All-zero stats, returned for empty or fully decayed input.
    pub const ZERO: Self = Self {
        accuracy_percent: 0,
        speed_ms: 0,
        effective_total: 0.0,
        effective_correct: 0.0,
    };

    /// A player qualifies for the leaderboard once any attempt still carries weight.
    pub fn is_qualified(&self) -> bool {
        self.effective_total > 0.0
    }
}

/// Public profile data joined onto a player's stats.
///
/// `previous_rank` comes from an external snapshot of the combined
/// leaderboard and is never computed here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_image_ref: Option<String>,
    #[serde(default)]
    pub previous_rank: Option<u32>,
}

/// A leaderboard row before ranking.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    pub user_id: String,
    pub display_name: String,
    pub accuracy_percent: u32,
    pub speed_ms: u32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub profile_image_ref: Option<String>,
}

impl PlayerEntry {
    /// Build an entry from aggregated stats and an optional profile.
    ///
    /// Without a profile the user id doubles as the display name.
    pub fn from_stats(user_id: &str, stats: &WeightedStats, profile: Option<&PlayerProfile>) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: profile
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| user_id.to_string()),
            accuracy_percent: stats.accuracy_percent,
            speed_ms: stats.speed_ms,
            previous_rank: profile.and_then(|p| p.previous_rank),
            profile_image_ref: profile.and_then(|p| p.profile_image_ref.clone()),
        }
    }
}

/// A ranked leaderboard row. `rank` is 1-based and best-first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub player: PlayerEntry,
}

/// Which statistic a leaderboard is ordered by.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Accuracy,
    Speed,
    #[default]
    Combined,
}

impl SortField {
    /// The direction in which this field lists best players first.
    ///
    /// # Examples
    ///
    /// ```
    /// use orient_core::types::{SortDirection, SortField};
    /// assert_eq!(SortField::Speed.natural_direction(), SortDirection::Asc);
    /// assert_eq!(SortField::Combined.natural_direction(), SortDirection::Desc);
    /// ```
    pub fn natural_direction(&self) -> SortDirection {
        match self {
            Self::Speed => SortDirection::Asc,
            Self::Accuracy | Self::Combined => SortDirection::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Speed => "speed",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accuracy" => Ok(Self::Accuracy),
            "speed" => Ok(Self::Speed),
            "combined" => Ok(Self::Combined),
            _ => Err(ParseFieldError::UnknownSortField(s.to_string())),
        }
    }
}

/// Display direction of a ranked list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ParseFieldError::UnknownSortDirection(s.to_string())),
        }
    }
}
