use crate::errors::AppError;
use crate::models::{
    EntryId, NewEntry, NewRecord, SessionRecord, TimetableEntry, User, UserId, Weekday,
};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(AppError::InvalidTimestamp(s.to_string())))
}

fn parse_optional_timestamp(s: Option<String>) -> Result<Option<DateTime<Local>>> {
    s.filter(|v| !v.is_empty())
        .map(|v| parse_timestamp(&v))
        .transpose()
}

fn parse_day(s: &str) -> Result<Weekday> {
    Weekday::from_db_str(s).ok_or_else(|| conversion_error(AppError::InvalidDay(s.to_string())))
}

/// Fixed-width UTC text, so SQLite's string order is chronological.
fn ts_to_db(ts: &DateTime<Local>) -> String {
    ts.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn optional_ts_to_db(ts: &Option<DateTime<Local>>) -> Option<String> {
    ts.as_ref().map(ts_to_db)
}

// ---------------------------
// Row mapping
// ---------------------------

pub fn map_user(row: &Row) -> Result<User> {
    let created_at: String = row.get("created_at")?;
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        created_at: parse_timestamp(&created_at)?,
    })
}

pub fn map_entry(row: &Row) -> Result<TimetableEntry> {
    let day: String = row.get("day")?;
    Ok(TimetableEntry {
        id: row.get("id")?,
        day: parse_day(&day)?,
        time_slot: row.get("time_slot")?,
        focus_area: row.get("focus_area")?,
    })
}

pub fn map_record(row: &Row) -> Result<SessionRecord> {
    let day: String = row.get("day")?;
    let created_at: String = row.get("created_at")?;
    Ok(SessionRecord {
        id: row.get("id")?,
        entry_id: row.get("entry_id")?,
        day: parse_day(&day)?,
        time_slot: row.get("time_slot")?,
        focus_area: row.get("focus_area")?,
        is_completed: row.get::<_, i64>("is_completed")? != 0,
        checked_in_at: parse_optional_timestamp(row.get("checked_in_at")?)?,
        checked_out_at: parse_optional_timestamp(row.get("checked_out_at")?)?,
        created_at: parse_timestamp(&created_at)?,
    })
}

// ---------------------------
// Users / auth session
// ---------------------------

pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    conn.query_row(
        "SELECT id, email, created_at FROM users WHERE email = ?1",
        [email],
        map_user,
    )
    .optional()
}

pub fn insert_user(conn: &Connection, email: &str, now: &DateTime<Local>) -> Result<User> {
    conn.execute(
        "INSERT INTO users (email, created_at) VALUES (?1, ?2)",
        params![email, ts_to_db(now)],
    )?;
    Ok(User {
        id: conn.last_insert_rowid(),
        email: email.to_string(),
        created_at: *now,
    })
}

pub fn load_session_user(conn: &Connection) -> Result<Option<User>> {
    conn.query_row(
        "SELECT u.id, u.email, u.created_at
         FROM auth_session s
         JOIN users u ON u.id = s.user_id
         WHERE s.id = 1",
        [],
        map_user,
    )
    .optional()
}

pub fn store_session_user(conn: &Connection, user_id: UserId, now: &DateTime<Local>) -> Result<()> {
    conn.execute(
        "INSERT INTO auth_session (id, user_id, signed_in_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET user_id = excluded.user_id, signed_in_at = excluded.signed_in_at",
        params![user_id, ts_to_db(now)],
    )?;
    Ok(())
}

pub fn clear_session(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM auth_session", [])?;
    Ok(())
}

// ---------------------------
// Timetable entries
// ---------------------------

pub fn list_entries(conn: &Connection, user_id: UserId) -> Result<Vec<TimetableEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, day, time_slot, focus_area FROM timetable_entries
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_entry(conn: &Connection, user_id: UserId, id: EntryId) -> Result<Option<TimetableEntry>> {
    conn.query_row(
        "SELECT id, day, time_slot, focus_area FROM timetable_entries
         WHERE user_id = ?1 AND id = ?2",
        params![user_id, id],
        map_entry,
    )
    .optional()
}

pub fn insert_entry(conn: &Connection, user_id: UserId, entry: &NewEntry) -> Result<TimetableEntry> {
    conn.execute(
        "INSERT INTO timetable_entries (user_id, day, time_slot, focus_area, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            entry.day.to_db_str(),
            entry.time_slot,
            entry.focus_area,
            ts_to_db(&Local::now()),
        ],
    )?;

    Ok(TimetableEntry {
        id: conn.last_insert_rowid(),
        day: entry.day,
        time_slot: entry.time_slot.clone(),
        focus_area: entry.focus_area.clone(),
    })
}

pub fn update_entry(conn: &Connection, user_id: UserId, entry: &TimetableEntry) -> Result<usize> {
    conn.execute(
        "UPDATE timetable_entries
         SET day = ?1, time_slot = ?2, focus_area = ?3
         WHERE id = ?4 AND user_id = ?5",
        params![
            entry.day.to_db_str(),
            entry.time_slot,
            entry.focus_area,
            entry.id,
            user_id
        ],
    )
}

pub fn delete_entry(conn: &Connection, user_id: UserId, id: EntryId) -> Result<usize> {
    conn.execute(
        "DELETE FROM timetable_entries WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )
}

// ---------------------------
// Session records
// ---------------------------

const RECORD_COLUMNS: &str = "id, entry_id, day, time_slot, focus_area, is_completed, \
                              checked_in_at, checked_out_at, created_at";

pub fn list_records(conn: &Connection, user_id: UserId) -> Result<Vec<SessionRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {RECORD_COLUMNS} FROM session_records
         WHERE user_id = ?1
         ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_record(conn: &Connection, user_id: UserId, rec: &NewRecord) -> Result<SessionRecord> {
    conn.execute(
        "INSERT INTO session_records
            (user_id, entry_id, day, time_slot, focus_area, is_completed,
             checked_in_at, checked_out_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            rec.entry_id,
            rec.day.to_db_str(),
            rec.time_slot,
            rec.focus_area,
            rec.is_completed,
            optional_ts_to_db(&rec.checked_in_at),
            optional_ts_to_db(&rec.checked_out_at),
            ts_to_db(&rec.created_at),
        ],
    )?;

    Ok(SessionRecord {
        id: conn.last_insert_rowid(),
        entry_id: rec.entry_id,
        day: rec.day,
        time_slot: rec.time_slot.clone(),
        focus_area: rec.focus_area.clone(),
        is_completed: rec.is_completed,
        checked_in_at: rec.checked_in_at,
        checked_out_at: rec.checked_out_at,
        created_at: rec.created_at,
    })
}

/// Only the mutable state of a record is written back; its triple and
/// creation time never change.
pub fn update_record(conn: &Connection, user_id: UserId, rec: &SessionRecord) -> Result<usize> {
    conn.execute(
        "UPDATE session_records
         SET is_completed = ?1, checked_in_at = ?2, checked_out_at = ?3
         WHERE id = ?4 AND user_id = ?5",
        params![
            rec.is_completed,
            optional_ts_to_db(&rec.checked_in_at),
            optional_ts_to_db(&rec.checked_out_at),
            rec.id,
            user_id
        ],
    )
}
