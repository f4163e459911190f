//! Error types for route-choice scoring.
//!
//! The scoring functions themselves are total. Errors only arise where raw
//! rows or user-supplied strings enter the typed core.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    #[error("empty user id")] EmptyUserId,
    #[error("negative response time: {0} ms")] NegativeResponseTime(i64),
    #[error("response time out of range: {0} ms")] ResponseTimeOutOfRange(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFieldError {
    #[error("unknown sort field: {0} (expected accuracy, speed or combined)")] UnknownSortField(String),
    #[error("unknown sort direction: {0} (expected asc or desc)")] UnknownSortDirection(String),
}
