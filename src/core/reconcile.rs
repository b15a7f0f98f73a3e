//! Reconciles the timetable with the session log.
//!
//! A record belongs to an entry when their (day, time slot, focus area)
//! triples are equal. There is no foreign key behind this: editing an
//! entry's labels detaches it from the records logged before the edit.
//! `MatchStrategy::Entry` uses the entry id stored on newer records
//! instead, falling back to the triple for records that have none.

use crate::models::{DisplayState, EntryId, SessionRecord, TimetableEntry, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Match on (day, time slot, focus area) equality only
    #[default]
    Triple,
    /// Match on the stored entry id, triple for records without one
    Entry,
}

/// Entries of one day, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: Weekday,
    pub entries: Vec<&'a TimetableEntry>,
}

pub fn record_matches(entry: &TimetableEntry, record: &SessionRecord, strategy: MatchStrategy) -> bool {
    match (strategy, record.entry_id) {
        (MatchStrategy::Entry, Some(id)) => id == entry.id,
        _ => record.slot_key() == entry.slot_key(),
    }
}

/// All records belonging to `entry`, newest first.
pub fn records_for_entry<'a>(
    entry: &TimetableEntry,
    records: &'a [SessionRecord],
    strategy: MatchStrategy,
) -> Vec<&'a SessionRecord> {
    let mut out: Vec<&SessionRecord> = records
        .iter()
        .filter(|r| record_matches(entry, r, strategy))
        .collect();
    out.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    out
}

/// Most recently created record for `entry`, whatever order `records` is in.
pub fn latest_record<'a>(
    entry: &TimetableEntry,
    records: &'a [SessionRecord],
    strategy: MatchStrategy,
) -> Option<&'a SessionRecord> {
    records
        .iter()
        .filter(|r| record_matches(entry, r, strategy))
        .max_by_key(|r| (r.created_at, r.id))
}

pub fn display_state(record: Option<&SessionRecord>) -> DisplayState {
    match record {
        None => DisplayState::NotStarted,
        Some(r) if r.is_completed => DisplayState::Completed,
        Some(r) => match r.checked_in_at {
            Some(since) => DisplayState::CheckedIn { since },
            None => DisplayState::NotStarted,
        },
    }
}

/// Display state of every entry, matching on the triple.
pub fn resolve_state(
    entries: &[TimetableEntry],
    records: &[SessionRecord],
) -> BTreeMap<EntryId, DisplayState> {
    resolve_state_with(entries, records, MatchStrategy::Triple)
}

pub fn resolve_state_with(
    entries: &[TimetableEntry],
    records: &[SessionRecord],
    strategy: MatchStrategy,
) -> BTreeMap<EntryId, DisplayState> {
    entries
        .iter()
        .map(|e| (e.id, display_state(latest_record(e, records, strategy))))
        .collect()
}

/// Groups entries Monday → Sunday, skipping days without entries.
pub fn group_by_day(entries: &[TimetableEntry]) -> Vec<DayGroup<'_>> {
    let mut by_day: BTreeMap<Weekday, Vec<&TimetableEntry>> = BTreeMap::new();
    for e in entries {
        by_day.entry(e.day).or_default().push(e);
    }

    by_day
        .into_iter()
        .map(|(day, entries)| DayGroup { day, entries })
        .collect()
}
