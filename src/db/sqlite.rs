//! SQLite-backed store (one connection per CLI invocation).

use crate::auth::AuthSession;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::queries;
use crate::db::store::StudyStore;
use crate::errors::AppResult;
use crate::models::{
    EntryId, NewEntry, NewRecord, SessionRecord, TimetableEntry, User,
};
use chrono::Local;
use rusqlite::Connection;
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl StudyStore for SqliteStore {
    fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(queries::find_user_by_email(&self.conn, email)?)
    }

    fn insert_user(&self, email: &str) -> AppResult<User> {
        Ok(queries::insert_user(&self.conn, email, &Local::now())?)
    }

    fn load_auth_session(&self) -> AppResult<AuthSession> {
        Ok(match queries::load_session_user(&self.conn)? {
            Some(user) => AuthSession::SignedIn(user),
            None => AuthSession::SignedOut,
        })
    }

    fn save_auth_session(&self, session: &AuthSession) -> AppResult<()> {
        match session {
            AuthSession::SignedIn(user) => {
                queries::store_session_user(&self.conn, user.id, &Local::now())?
            }
            AuthSession::SignedOut => queries::clear_session(&self.conn)?,
        }
        Ok(())
    }

    fn list_entries(&self, user: &User) -> AppResult<Vec<TimetableEntry>> {
        Ok(queries::list_entries(&self.conn, user.id)?)
    }

    fn get_entry(&self, user: &User, id: EntryId) -> AppResult<Option<TimetableEntry>> {
        Ok(queries::get_entry(&self.conn, user.id, id)?)
    }

    fn insert_entry(&self, user: &User, entry: &NewEntry) -> AppResult<TimetableEntry> {
        Ok(queries::insert_entry(&self.conn, user.id, entry)?)
    }

    fn update_entry(&self, user: &User, entry: &TimetableEntry) -> AppResult<bool> {
        Ok(queries::update_entry(&self.conn, user.id, entry)? > 0)
    }

    fn delete_entry(&self, user: &User, id: EntryId) -> AppResult<bool> {
        Ok(queries::delete_entry(&self.conn, user.id, id)? > 0)
    }

    fn list_records(&self, user: &User) -> AppResult<Vec<SessionRecord>> {
        Ok(queries::list_records(&self.conn, user.id)?)
    }

    fn insert_record(&self, user: &User, record: &NewRecord) -> AppResult<SessionRecord> {
        Ok(queries::insert_record(&self.conn, user.id, record)?)
    }

    fn update_record(&self, user: &User, record: &SessionRecord) -> AppResult<bool> {
        Ok(queries::update_record(&self.conn, user.id, record)? > 0)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
