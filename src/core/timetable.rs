use crate::core::reconcile::{DayGroup, MatchStrategy, group_by_day, resolve_state_with};
use crate::core::seed::DEFAULT_TIMETABLE;
use crate::db::log::audit_or_warn;
use crate::db::store::StudyStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DisplayState, EntryId, NewEntry, TimetableEntry, User, Weekday};
use std::collections::BTreeMap;

/// Fields to change on an existing entry; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryChanges {
    pub day: Option<Weekday>,
    pub time_slot: Option<String>,
    pub focus_area: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.time_slot.is_none() && self.focus_area.is_none()
    }
}

/// Entries plus the state each one resolves to.
#[derive(Debug, Clone)]
pub struct TimetableView {
    pub entries: Vec<TimetableEntry>,
    pub states: BTreeMap<EntryId, DisplayState>,
}

impl TimetableView {
    pub fn groups(&self) -> Vec<DayGroup<'_>> {
        group_by_day(&self.entries)
    }

    pub fn state_of(&self, id: EntryId) -> DisplayState {
        self.states
            .get(&id)
            .copied()
            .unwrap_or(DisplayState::NotStarted)
    }

    pub fn count(&self, pred: impl Fn(&DisplayState) -> bool) -> usize {
        self.states.values().filter(|s| pred(*s)).count()
    }
}

/// Trim a free-text label and reject it when nothing is left.
pub fn validate_label(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v.to_string())
}

fn entry_target(e: &TimetableEntry) -> String {
    format!("#{} {}", e.id, e.day)
}

pub struct TimetableLogic;

impl TimetableLogic {
    pub fn view<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        match_by: MatchStrategy,
    ) -> AppResult<TimetableView> {
        let entries = store.list_entries(user)?;
        let records = store.list_records(user)?;
        let states = resolve_state_with(&entries, &records, match_by);

        Ok(TimetableView {
            entries,
            states,
        })
    }

    pub fn add<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        day: Weekday,
        time_slot: &str,
        focus_area: &str,
    ) -> AppResult<TimetableEntry> {
        let new = NewEntry {
            day,
            time_slot: validate_label(time_slot, "time slot")?,
            focus_area: validate_label(focus_area, "focus area")?,
        };

        let entry = store.insert_entry(user, &new)?;
        audit_or_warn(
            store,
            "add",
            &entry_target(&entry),
            &format!("{} | {}", entry.time_slot, entry.focus_area),
        );

        Ok(entry)
    }

    /// Apply `changes` to entry `id`. Returns the entry before and after.
    ///
    /// Session records logged under the old labels are left as they are.
    pub fn edit<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        id: EntryId,
        changes: &EntryChanges,
    ) -> AppResult<(TimetableEntry, TimetableEntry)> {
        let before = store.get_entry(user, id)?.ok_or(AppError::EntryNotFound(id))?;

        let mut after = before.clone();
        if let Some(day) = changes.day {
            after.day = day;
        }
        if let Some(slot) = &changes.time_slot {
            after.time_slot = validate_label(slot, "time slot")?;
        }
        if let Some(focus) = &changes.focus_area {
            after.focus_area = validate_label(focus, "focus area")?;
        }

        if after != before {
            if !store.update_entry(user, &after)? {
                return Err(AppError::EntryNotFound(id));
            }
            audit_or_warn(
                store,
                "edit",
                &entry_target(&after),
                &format!(
                    "{} {} | {} → {} {} | {}",
                    before.day,
                    before.time_slot,
                    before.focus_area,
                    after.day,
                    after.time_slot,
                    after.focus_area
                ),
            );
        }

        Ok((before, after))
    }

    /// Delete entry `id`; its session records stay in the history.
    pub fn delete<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        id: EntryId,
    ) -> AppResult<TimetableEntry> {
        let entry = store.get_entry(user, id)?.ok_or(AppError::EntryNotFound(id))?;

        if !store.delete_entry(user, id)? {
            return Err(AppError::EntryNotFound(id));
        }

        audit_or_warn(
            store,
            "del",
            &entry_target(&entry),
            &format!("{} | {}", entry.time_slot, entry.focus_area),
        );

        Ok(entry)
    }

    /// Insert the default weekly plan. Refuses on a non-empty timetable
    /// unless `force` is set.
    pub fn seed_default<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        force: bool,
    ) -> AppResult<Vec<TimetableEntry>> {
        let existing = store.list_entries(user)?.len();
        if existing > 0 && !force {
            return Err(AppError::TimetableNotEmpty(existing));
        }

        let mut out = Vec::new();
        for (day, slots) in DEFAULT_TIMETABLE {
            for (time_slot, focus_area) in *slots {
                let new = NewEntry {
                    day: *day,
                    time_slot: time_slot.to_string(),
                    focus_area: focus_area.to_string(),
                };
                out.push(store.insert_entry(user, &new)?);
            }
        }

        audit_or_warn(
            store,
            "seed",
            &user.email,
            &format!("Inserted {} default entries", out.len()),
        );

        Ok(out)
    }
}
