//! # orient-core
//! Foundation types and traits for route-choice scoring and leaderboards.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
