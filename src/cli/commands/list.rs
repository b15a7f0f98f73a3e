use crate::cli::commands::{parse_day, signed_in};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timetable::TimetableLogic;
use crate::errors::AppResult;
use crate::models::{DisplayState, Weekday};
use crate::ui::messages::{header, hint, info};
use crate::utils::colors::color_for_state;
use crate::utils::formatting::{bold, describe_state, state_icon};
use crate::utils::table::Table;
use chrono::Local;

/// Show the timetable grouped by day, each slot with its current state.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, today } = cmd {
        let only_day: Option<Weekday> = if *today {
            Some(Weekday::today())
        } else {
            day.as_deref().map(parse_day).transpose()?
        };

        let (store, user) = signed_in(cfg)?;
        let view = TimetableLogic::view(&store, &user, cfg.match_by)?;

        if view.entries.is_empty() {
            info("Your timetable is empty.");
            hint("Run `rstudyplan seed` for the default plan, or `rstudyplan add <day> <slot> <focus>`.");
            return Ok(());
        }

        let now = Local::now();
        let mut shown = 0usize;

        for group in view.groups() {
            if only_day.is_some_and(|d| d != group.day) {
                continue;
            }

            header(group.day);

            let mut table =
                Table::new(["", "ID", "TIME SLOT", "FOCUS", "STATE", "NEXT"]).with_separator(cfg.separator());

            for entry in &group.entries {
                let state = view.state_of(entry.id);
                table.add_colored_row(
                    vec![
                        state_icon(&state).to_string(),
                        entry.id.to_string(),
                        entry.time_slot.clone(),
                        entry.focus_area.clone(),
                        describe_state(&state, now),
                        state.next_action().to_string(),
                    ],
                    color_for_state(&state),
                );
                shown += 1;
            }

            print!("{}", table.render());
        }

        if shown == 0 {
            if let Some(d) = only_day {
                info(format!("No sessions planned for {}.", d));
            }
            return Ok(());
        }

        let completed = view.count(DisplayState::is_completed);
        let checked_in = view.count(DisplayState::is_checked_in);

        println!();
        println!(
            "{} {} sessions, {} checked in, {} completed",
            bold("Week:"),
            view.entries.len(),
            checked_in,
            completed
        );
    }

    Ok(())
}
