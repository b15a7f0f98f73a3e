use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

const ENTRY_LINK_MIGRATION: &str = "20250301_0001_add_entry_link";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [Local::now().to_rfc3339().as_str(), version, message],
    )?;
    Ok(())
}

/// Users and the single-row signed-in session.
fn create_auth_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            email       TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS auth_session (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            user_id       INTEGER NOT NULL REFERENCES users(id),
            signed_in_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_timetable_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS timetable_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            day         TEXT NOT NULL CHECK(day IN ('Monday','Tuesday','Wednesday','Thursday','Friday','Saturday','Sunday')),
            time_slot   TEXT NOT NULL,
            focus_area  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_day ON timetable_entries(user_id, day);
        "#,
    )?;
    Ok(())
}

/// No foreign key on `entry_id`: records outlive the entries they came from.
fn create_session_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session_records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL REFERENCES users(id),
            entry_id        INTEGER,
            day             TEXT NOT NULL,
            time_slot       TEXT NOT NULL,
            focus_area      TEXT NOT NULL,
            is_completed    INTEGER NOT NULL DEFAULT 0,
            checked_in_at   TEXT,
            checked_out_at  TEXT,
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_user_created ON session_records(user_id, created_at);
        "#,
    )?;
    Ok(())
}

/// Older databases stored records without the link to their entry.
fn migrate_add_entry_link(conn: &Connection) -> Result<()> {
    if migration_applied(conn, ENTRY_LINK_MIGRATION)? {
        return Ok(());
    }

    if !table_has_column(conn, "session_records", "entry_id")? {
        warning("Adding 'entry_id' column to session_records table...");
        conn.execute_batch("ALTER TABLE session_records ADD COLUMN entry_id INTEGER;")?;
        success(format!(
            "Migration applied: {} → added 'entry_id' to session_records table",
            ENTRY_LINK_MIGRATION
        ));
    }

    mark_migration_applied(
        conn,
        ENTRY_LINK_MIGRATION,
        "Added entry_id link to session_records",
    )
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Users and auth session
    create_auth_tables(conn)?;

    // 3) Timetable
    if !table_exists(conn, "timetable_entries")? {
        create_timetable_table(conn)?;
        success("Created timetable_entries table.");
    }

    // 4) Session records (fresh schema, or upgrade of an older one)
    if !table_exists(conn, "session_records")? {
        create_session_records_table(conn)?;
        mark_migration_applied(
            conn,
            ENTRY_LINK_MIGRATION,
            "Created session_records with entry_id link",
        )?;
        success("Created session_records table.");
    } else {
        migrate_add_entry_link(conn)?;
    }

    Ok(())
}
