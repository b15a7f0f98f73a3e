use crate::cli::commands::{parse_day, signed_in};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::MatchStrategy;
use crate::core::timetable::{EntryChanges, TimetableLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        day,
        time_slot,
        focus_area,
    } = cmd
    {
        let changes = EntryChanges {
            day: day.as_deref().map(parse_day).transpose()?,
            time_slot: time_slot.clone(),
            focus_area: focus_area.clone(),
        };

        if changes.is_empty() {
            warning("Nothing to do: specify at least --day, --slot or --focus.");
            return Ok(());
        }

        let (store, user) = signed_in(cfg)?;
        let (before, after) = TimetableLogic::edit(&store, &user, *id, &changes)?;

        if before == after {
            info(format!("Session #{} unchanged.", id));
            return Ok(());
        }

        success(format!(
            "📝 Session #{} updated: {} {} → {}",
            after.id, after.day, after.time_slot, after.focus_area
        ));

        if cfg.match_by == MatchStrategy::Triple && before.slot_key() != after.slot_key() {
            warning(
                "Check-ins logged before this edit keep the old day/slot/focus and no longer match this session.",
            );
        }
    }

    Ok(())
}
