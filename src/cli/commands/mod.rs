pub mod add;
pub mod auth;
pub mod backup;
pub mod checkin;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod seed;

use crate::auth::AuthSession;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::{User, Weekday};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured database.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}

/// Open the database and resolve the signed-in user, or fail with
/// `NotSignedIn`.
pub(crate) fn signed_in(cfg: &Config) -> AppResult<(SqliteStore, User)> {
    let store = open_store(cfg)?;
    let user = AuthSession::load(&store)?.require_user()?.clone();
    Ok((store, user))
}

pub(crate) fn parse_day(s: &str) -> AppResult<Weekday> {
    Weekday::from_input(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
