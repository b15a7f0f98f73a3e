//! ANSI color helper utilities for terminal output.

use crate::models::DisplayState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Row colour of a slot in the timetable listing.
pub fn color_for_state(state: &DisplayState) -> &'static str {
    match state {
        DisplayState::NotStarted => RESET,
        DisplayState::CheckedIn { .. } => YELLOW,
        DisplayState::Completed => GREEN,
    }
}
