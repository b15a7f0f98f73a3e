use crate::cli::commands::{parse_day, signed_in};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timetable::TimetableLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a session to the timetable.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        day,
        time_slot,
        focus_area,
    } = cmd
    {
        // Validate input before touching the database
        let day = parse_day(day)?;
        let (store, user) = signed_in(cfg)?;

        let entry = TimetableLogic::add(&store, &user, day, time_slot, focus_area)?;

        success(format!(
            "📝 Session added (#{}): {} {} → {}",
            entry.id, entry.day, entry.time_slot, entry.focus_area
        ));
    }

    Ok(())
}
