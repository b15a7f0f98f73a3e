// src/export/model.rs

use crate::models::SessionRecord;
use crate::utils::time::session_minutes;
use serde::Serialize;

/// Flat row used by both CSV and JSON exports of the session history.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub id: i64,
    pub entry_id: Option<i64>,
    pub day: String,
    pub time_slot: String,
    pub focus_area: String,
    pub status: String,
    pub checked_in_at: String,
    pub checked_out_at: String,
    pub duration_minutes: Option<i64>,
    pub created_at: String,
}

impl From<&SessionRecord> for RecordExport {
    fn from(r: &SessionRecord) -> Self {
        let duration_minutes = session_minutes(r.checked_in_at, r.checked_out_at);

        let status = if r.is_completed {
            "completed"
        } else if r.checked_in_at.is_some() {
            "checked in"
        } else {
            "not started"
        };

        Self {
            id: r.id,
            entry_id: r.entry_id,
            day: r.day.to_string(),
            time_slot: r.time_slot.clone(),
            focus_area: r.focus_area.clone(),
            status: status.to_string(),
            checked_in_at: r.checked_in_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            checked_out_at: r.checked_out_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            duration_minutes,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
