use super::weekday::Weekday;
use serde::Serialize;

pub type EntryId = i64;

/// A user-defined recurring study slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableEntry {
    pub id: EntryId,            // ⇔ timetable_entries.id
    pub day: Weekday,           // ⇔ timetable_entries.day ("Monday".."Sunday")
    pub time_slot: String,      // ⇔ timetable_entries.time_slot (free text)
    pub focus_area: String,     // ⇔ timetable_entries.focus_area (free text)
}

impl TimetableEntry {
    pub fn slot_key(&self) -> SlotKey<'_> {
        SlotKey {
            day: self.day,
            time_slot: &self.time_slot,
            focus_area: &self.focus_area,
        }
    }
}

/// Values for an entry that is not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub day: Weekday,
    pub time_slot: String,
    pub focus_area: String,
}

/// The (day, time slot, focus area) triple entries and records are matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey<'a> {
    pub day: Weekday,
    pub time_slot: &'a str,
    pub focus_area: &'a str,
}
