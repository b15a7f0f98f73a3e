use chrono::{DateTime, Local};
use serde::Serialize;

/// What a timetable slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayState {
    NotStarted,
    CheckedIn { since: DateTime<Local> },
    Completed,
}

impl DisplayState {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::NotStarted => "not started",
            DisplayState::CheckedIn { .. } => "checked in",
            DisplayState::Completed => "completed",
        }
    }

    /// Label of the action the slot offers next.
    pub fn next_action(&self) -> &'static str {
        match self {
            DisplayState::NotStarted => "check in",
            DisplayState::CheckedIn { .. } => "complete",
            DisplayState::Completed => "start again",
        }
    }

    pub fn is_checked_in(&self) -> bool {
        matches!(self, DisplayState::CheckedIn { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, DisplayState::Completed)
    }
}
