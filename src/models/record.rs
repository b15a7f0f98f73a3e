use super::entry::{EntryId, SlotKey, TimetableEntry};
use super::weekday::Weekday;
use chrono::{DateTime, Local};
use serde::Serialize;

pub type RecordId = i64;

/// One logged attempt at a timetable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub id: RecordId,
    pub entry_id: Option<EntryId>, // entry the check-in was issued from, if known
    pub day: Weekday,
    pub time_slot: String,
    pub focus_area: String,
    pub is_completed: bool,
    pub checked_in_at: Option<DateTime<Local>>,
    pub checked_out_at: Option<DateTime<Local>>,
    pub created_at: DateTime<Local>,
}

impl SessionRecord {
    pub fn slot_key(&self) -> SlotKey<'_> {
        SlotKey {
            day: self.day,
            time_slot: &self.time_slot,
            focus_area: &self.focus_area,
        }
    }
}

/// Values for a record that is not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub entry_id: Option<EntryId>,
    pub day: Weekday,
    pub time_slot: String,
    pub focus_area: String,
    pub is_completed: bool,
    pub checked_in_at: Option<DateTime<Local>>,
    pub checked_out_at: Option<DateTime<Local>>,
    pub created_at: DateTime<Local>,
}

impl NewRecord {
    /// A fresh check-in on `entry`, copying its triple as it is right now.
    pub fn check_in(entry: &TimetableEntry, now: DateTime<Local>) -> Self {
        Self {
            entry_id: Some(entry.id),
            day: entry.day,
            time_slot: entry.time_slot.clone(),
            focus_area: entry.focus_area.clone(),
            is_completed: false,
            checked_in_at: Some(now),
            checked_out_at: None,
            created_at: now,
        }
    }
}
