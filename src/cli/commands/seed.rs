use crate::cli::commands::signed_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timetable::TimetableLogic;
use crate::errors::AppResult;
use crate::ui::messages::{hint, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { force } = cmd {
        let (store, user) = signed_in(cfg)?;

        let added = TimetableLogic::seed_default(&store, &user, *force)?;

        success(format!("🎉 Added {} sessions to your timetable.", added.len()));
        hint("Run `rstudyplan list` to see your week.");
    }

    Ok(())
}
