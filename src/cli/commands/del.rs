use crate::cli::commands::{ask_confirmation, signed_in};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timetable::TimetableLogic;
use crate::db::StudyStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let (store, user) = signed_in(cfg)?;

        let entry = store
            .get_entry(&user, *id)?
            .ok_or(AppError::EntryNotFound(*id))?;

        //
        // Confirmation prompt
        //
        if !*force {
            let prompt = format!(
                "Delete session #{} ({} {} → {})? Its check-in history is kept.",
                entry.id, entry.day, entry.time_slot, entry.focus_area
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = TimetableLogic::delete(&store, &user, *id)?;
        success(format!(
            "🗑️  Session #{} deleted: {} {} → {}",
            deleted.id, deleted.day, deleted.time_slot, deleted.focus_area
        ));
    }

    Ok(())
}
