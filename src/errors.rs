//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day: {0} (use Monday..Sunday or Mon..Sun)")]
    InvalidDay(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Please log in to continue (use `rstudyplan login <email>`)")]
    NotSignedIn,

    // ---------------------------
    // Timetable / session logic
    // ---------------------------
    #[error("Please fill in all fields: {0} must not be empty")]
    MissingField(&'static str),

    #[error("Timetable entry #{0} not found")]
    EntryNotFound(i64),

    #[error("Session record #{0} not found")]
    RecordNotFound(i64),

    #[error("Already checked in to '{focus_area}' ({day} {time_slot}); complete it first")]
    AlreadyCheckedIn {
        day: String,
        time_slot: String,
        focus_area: String,
    },

    #[error("No active check-in for '{focus_area}' ({day} {time_slot}); check in first")]
    NotCheckedIn {
        day: String,
        time_slot: String,
        focus_area: String,
    },

    #[error("Timetable already has {0} entries; use --force to seed anyway")]
    TimetableNotEmpty(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
