pub mod display_state;
pub mod entry;
pub mod record;
pub mod user;
pub mod weekday;

pub use display_state::DisplayState;
pub use entry::{EntryId, NewEntry, SlotKey, TimetableEntry};
pub use record::{NewRecord, RecordId, SessionRecord};
pub use user::{User, UserId};
pub use weekday::Weekday;
