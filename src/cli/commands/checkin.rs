use crate::cli::commands::signed_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckInOutcome, SessionLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_timestamp;
use crate::utils::mins2readable;
use crate::utils::time::session_minutes;
use chrono::Local;

/// Handle both `checkin` and `complete`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Checkin { id, policy } => {
            let (store, user) = signed_in(cfg)?;

            let mut opts = cfg.session_options();
            if let Some(p) = policy {
                opts.start_again = *p;
            }

            let outcome = SessionLogic::check_in(&store, &user, *id, opts, Local::now())?;
            let rec = outcome.record();

            match &outcome {
                CheckInOutcome::Started(_) => success("Checked in! Time to focus! 📚"),
                CheckInOutcome::Restarted(_) => {
                    success("Started again! New session logged. 📚")
                }
                CheckInOutcome::Reopened(_) => {
                    success("Started again! Previous session reopened. 📚")
                }
            }

            info(format!(
                "{} {} → {} (since {})",
                rec.day,
                rec.time_slot,
                rec.focus_area,
                format_timestamp(rec.checked_in_at.as_ref())
            ));
        }

        Commands::Complete { id } => {
            let (store, user) = signed_in(cfg)?;

            let rec = SessionLogic::complete(&store, &user, *id, cfg.session_options(), Local::now())?;

            success("Session completed! Great work! 🎉");

            let duration = session_minutes(rec.checked_in_at, rec.checked_out_at)
                .map(|m| mins2readable(m, false, false))
                .unwrap_or_else(|| "--:--".to_string());

            info(format!(
                "{} {} → {} ({})",
                rec.day, rec.time_slot, rec.focus_area, duration
            ));
        }

        _ => {}
    }

    Ok(())
}
