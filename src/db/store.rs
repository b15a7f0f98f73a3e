//! Record API of the backing store.
//!
//! Every call is a single, independent request: no transactions span calls
//! and nothing is cached between them. Rows are always scoped to a user.

use crate::auth::AuthSession;
use crate::errors::AppResult;
use crate::models::{
    EntryId, NewEntry, NewRecord, SessionRecord, TimetableEntry, User,
};

pub trait StudyStore {
    // ---------------------------
    // Users / auth session
    // ---------------------------
    fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    fn insert_user(&self, email: &str) -> AppResult<User>;
    fn load_auth_session(&self) -> AppResult<AuthSession>;
    fn save_auth_session(&self, session: &AuthSession) -> AppResult<()>;

    // ---------------------------
    // Timetable entries
    // ---------------------------
    fn list_entries(&self, user: &User) -> AppResult<Vec<TimetableEntry>>;
    fn get_entry(&self, user: &User, id: EntryId) -> AppResult<Option<TimetableEntry>>;
    fn insert_entry(&self, user: &User, entry: &NewEntry) -> AppResult<TimetableEntry>;
    /// Returns `false` when no row with that id belongs to `user`.
    fn update_entry(&self, user: &User, entry: &TimetableEntry) -> AppResult<bool>;
    /// Returns `false` when no row with that id belongs to `user`.
    fn delete_entry(&self, user: &User, id: EntryId) -> AppResult<bool>;

    // ---------------------------
    // Session records
    // ---------------------------
    /// Newest first.
    fn list_records(&self, user: &User) -> AppResult<Vec<SessionRecord>>;
    fn insert_record(&self, user: &User, record: &NewRecord) -> AppResult<SessionRecord>;
    /// Returns `false` when no row with that id belongs to `user`.
    fn update_record(&self, user: &User, record: &SessionRecord) -> AppResult<bool>;

    // ---------------------------
    // Internal audit log
    // ---------------------------
    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
