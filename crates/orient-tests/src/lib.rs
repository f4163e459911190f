//! Integration test suite for route-choice scoring.
//!
//! Tests drive the full path from raw attempt rows through weighted stats,
//! ranking and windowing, the way a leaderboard screen would.

pub mod helpers;
