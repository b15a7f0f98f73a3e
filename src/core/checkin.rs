//! Check-in / complete / start-again transitions of a timetable slot.
//!
//! Every transition is exactly one store write. Nothing is retried: a failed
//! write is returned to the caller and the slot keeps its previous state.

use crate::core::reconcile::{MatchStrategy, display_state, latest_record};
use crate::db::log::audit_or_warn;
use crate::db::store::StudyStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DisplayState, EntryId, NewRecord, SessionRecord, TimetableEntry, User};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What checking in to a completed slot does to the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum StartAgainPolicy {
    /// Insert a fresh record; earlier completions stay in the history
    #[default]
    #[serde(rename = "append")]
    Append,
    /// Reopen the completed record in place
    #[serde(rename = "reset")]
    #[value(name = "reset")]
    ResetInPlace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub match_by: MatchStrategy,
    pub start_again: StartAgainPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// First check-in on the slot.
    Started(SessionRecord),
    /// Start again after a completion, as a new record.
    Restarted(SessionRecord),
    /// Start again after a completion, reopening the previous record.
    Reopened(SessionRecord),
}

impl CheckInOutcome {
    pub fn record(&self) -> &SessionRecord {
        match self {
            CheckInOutcome::Started(r) | CheckInOutcome::Restarted(r) | CheckInOutcome::Reopened(r) => r,
        }
    }
}

/// A slot together with the record currently deciding its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub entry: TimetableEntry,
    pub latest: Option<SessionRecord>,
    pub state: DisplayState,
}

fn slot_target(entry: &TimetableEntry) -> String {
    format!("#{} {} {} {}", entry.id, entry.day, entry.time_slot, entry.focus_area)
}

pub struct SessionLogic;

impl SessionLogic {
    pub fn slot_status<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        entry_id: EntryId,
        match_by: MatchStrategy,
    ) -> AppResult<SlotStatus> {
        let entry = store
            .get_entry(user, entry_id)?
            .ok_or(AppError::EntryNotFound(entry_id))?;
        let records = store.list_records(user)?;

        let latest = latest_record(&entry, &records, match_by).cloned();
        let state = display_state(latest.as_ref());

        Ok(SlotStatus {
            entry,
            latest,
            state,
        })
    }

    pub fn check_in<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        entry_id: EntryId,
        opts: SessionOptions,
        now: DateTime<Local>,
    ) -> AppResult<CheckInOutcome> {
        let status = Self::slot_status(store, user, entry_id, opts.match_by)?;
        let entry = &status.entry;

        let outcome = match (status.state, status.latest) {
            (DisplayState::CheckedIn { .. }, _) => {
                return Err(AppError::AlreadyCheckedIn {
                    day: entry.day.to_string(),
                    time_slot: entry.time_slot.clone(),
                    focus_area: entry.focus_area.clone(),
                });
            }

            (DisplayState::Completed, Some(mut rec))
                if opts.start_again == StartAgainPolicy::ResetInPlace =>
            {
                rec.checked_in_at = Some(now);
                rec.checked_out_at = None;
                rec.is_completed = false;

                if !store.update_record(user, &rec)? {
                    return Err(AppError::RecordNotFound(rec.id));
                }
                CheckInOutcome::Reopened(rec)
            }

            (DisplayState::Completed, _) => {
                let rec = store.insert_record(user, &NewRecord::check_in(entry, now))?;
                CheckInOutcome::Restarted(rec)
            }

            (DisplayState::NotStarted, _) => {
                let rec = store.insert_record(user, &NewRecord::check_in(entry, now))?;
                CheckInOutcome::Started(rec)
            }
        };

        let message = match &outcome {
            CheckInOutcome::Started(_) => "Checked in",
            CheckInOutcome::Restarted(_) => "Started again (new record)",
            CheckInOutcome::Reopened(_) => "Started again (record reopened)",
        };
        audit_or_warn(store, "checkin", &slot_target(entry), message);

        Ok(outcome)
    }

    pub fn complete<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        entry_id: EntryId,
        opts: SessionOptions,
        now: DateTime<Local>,
    ) -> AppResult<SessionRecord> {
        let status = Self::slot_status(store, user, entry_id, opts.match_by)?;
        let entry = &status.entry;

        let mut rec = match (status.state, status.latest) {
            (DisplayState::CheckedIn { .. }, Some(rec)) => rec,
            _ => {
                return Err(AppError::NotCheckedIn {
                    day: entry.day.to_string(),
                    time_slot: entry.time_slot.clone(),
                    focus_area: entry.focus_area.clone(),
                });
            }
        };

        rec.is_completed = true;
        rec.checked_out_at = Some(now);

        if !store.update_record(user, &rec)? {
            return Err(AppError::RecordNotFound(rec.id));
        }

        audit_or_warn(store, "complete", &slot_target(entry), "Session completed");

        Ok(rec)
    }
}
