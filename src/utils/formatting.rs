//! Formatting utilities used for CLI and export outputs.

use crate::models::DisplayState;
use chrono::{DateTime, Local};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// "2025-03-04 18:30", or "--:--" when missing.
pub fn format_timestamp(ts: Option<&DateTime<Local>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// State text for listings, with elapsed time for an open check-in.
pub fn describe_state(state: &DisplayState, now: DateTime<Local>) -> String {
    match state {
        DisplayState::CheckedIn { since } => {
            let mins = crate::utils::time::elapsed_minutes(*since, now);
            format!("{} ({})", state.label(), mins2readable(mins, false, false))
        }
        _ => state.label().to_string(),
    }
}

pub fn state_icon(state: &DisplayState) -> &'static str {
    match state {
        DisplayState::NotStarted => "○",
        DisplayState::CheckedIn { .. } => "◔",
        DisplayState::Completed => "●",
    }
}
