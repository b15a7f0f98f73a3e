//! Time utilities for check-in durations.

use chrono::{DateTime, Local};

/// Whole minutes from `since` to `now`, never negative.
pub fn elapsed_minutes(since: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - since).num_minutes().max(0)
}

/// Minutes between check-in and check-out, when both are known.
pub fn session_minutes(
    checked_in_at: Option<DateTime<Local>>,
    checked_out_at: Option<DateTime<Local>>,
) -> Option<i64> {
    match (checked_in_at, checked_out_at) {
        (Some(start), Some(end)) => Some(elapsed_minutes(start, end)),
        _ => None,
    }
}
