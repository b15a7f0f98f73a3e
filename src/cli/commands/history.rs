use crate::cli::commands::signed_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::records_for_entry;
use crate::db::StudyStore;
use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, GREY, YELLOW};
use crate::utils::formatting::format_timestamp;
use crate::utils::mins2readable;
use crate::utils::table::Table;
use crate::utils::time::session_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { entry } = cmd {
        let (store, user) = signed_in(cfg)?;

        let all = store.list_records(&user)?;

        let records: Vec<&SessionRecord> = match entry {
            Some(id) => {
                let e = store
                    .get_entry(&user, *id)?
                    .ok_or(AppError::EntryNotFound(*id))?;
                records_for_entry(&e, &all, cfg.match_by)
            }
            None => all.iter().collect(),
        };

        if records.is_empty() {
            info("No sessions logged yet.");
            return Ok(());
        }

        let mut table = Table::new([
            "REC", "ENTRY", "DAY", "TIME SLOT", "FOCUS", "IN", "OUT", "DURATION", "DONE",
        ])
        .with_separator(cfg.separator());

        for r in records {
            let duration = session_minutes(r.checked_in_at, r.checked_out_at)
                .map(|m| mins2readable(m, false, true))
                .unwrap_or_else(|| "--:--".to_string());

            let row = vec![
                r.id.to_string(),
                r.entry_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                r.day.to_string(),
                r.time_slot.clone(),
                r.focus_area.clone(),
                format_timestamp(r.checked_in_at.as_ref()),
                format_timestamp(r.checked_out_at.as_ref()),
                duration,
                if r.is_completed { "yes" } else { "no" }.to_string(),
            ];

            let color = if r.is_completed {
                GREEN
            } else if r.checked_in_at.is_some() {
                YELLOW
            } else {
                GREY
            };
            table.add_colored_row(row, color);
        }

        print!("{}", table.render());
    }

    Ok(())
}
