use chrono::{DateTime, Duration, Local, TimeZone};
use rstudyplan::auth::{self, AuthSession};
use rstudyplan::core::checkin::{CheckInOutcome, SessionLogic, SessionOptions, StartAgainPolicy};
use rstudyplan::core::reconcile::MatchStrategy;
use rstudyplan::core::timetable::{EntryChanges, TimetableLogic};
use rstudyplan::db::{SqliteStore, StudyStore};
use rstudyplan::errors::AppError;
use rstudyplan::models::{DisplayState, NewRecord, User, Weekday};

fn t0() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 3, 20, 30, 0)
        .single()
        .expect("valid local time")
}

fn signed_in_store() -> (SqliteStore, User) {
    let store = SqliteStore::open_in_memory().expect("open store");
    let session = auth::login(&store, "Student@Example.com").expect("login");
    let user = session.user().expect("signed in").clone();
    (store, user)
}

#[test]
fn test_login_normalizes_and_reuses_user() {
    let (store, user) = signed_in_store();
    assert_eq!(user.email, "student@example.com");

    let again = auth::login(&store, "  student@example.com ").expect("login again");
    assert_eq!(again.user().map(|u| u.id), Some(user.id));

    let loaded = AuthSession::load(&store).expect("load session");
    assert!(loaded.is_signed_in());

    let out = auth::logout(&store).expect("logout");
    assert_eq!(out.map(|u| u.email), Some("student@example.com".to_string()));
    assert!(matches!(
        AuthSession::load(&store).expect("load session").require_user(),
        Err(AppError::NotSignedIn)
    ));
}

#[test]
fn test_full_lifecycle_append() {
    let (store, user) = signed_in_store();
    let opts = SessionOptions::default();

    let e = TimetableLogic::add(&store, &user, Weekday::Monday, "8:30-9:15pm", "DSA coding")
        .expect("add");

    let status = SessionLogic::slot_status(&store, &user, e.id, opts.match_by).expect("status");
    assert_eq!(status.state, DisplayState::NotStarted);

    let started = SessionLogic::check_in(&store, &user, e.id, opts, t0()).expect("check in");
    assert!(matches!(started, CheckInOutcome::Started(_)));
    assert_eq!(started.record().entry_id, Some(e.id));

    let done = SessionLogic::complete(&store, &user, e.id, opts, t0() + Duration::minutes(45))
        .expect("complete");
    assert!(done.is_completed);
    assert_eq!(done.checked_out_at, Some(t0() + Duration::minutes(45)));

    let again = SessionLogic::check_in(&store, &user, e.id, opts, t0() + Duration::hours(2))
        .expect("start again");
    assert!(matches!(again, CheckInOutcome::Restarted(_)));

    let records = store.list_records(&user).expect("records");
    assert_eq!(records.len(), 2);
    // Newest first; the earlier completion is untouched
    assert!(!records[0].is_completed);
    assert!(records[1].is_completed);

    let view = TimetableLogic::view(&store, &user, MatchStrategy::Triple).expect("view");
    assert_eq!(
        view.state_of(e.id),
        DisplayState::CheckedIn {
            since: t0() + Duration::hours(2)
        }
    );
}

#[test]
fn test_start_again_reset_in_place() {
    let (store, user) = signed_in_store();
    let opts = SessionOptions {
        start_again: StartAgainPolicy::ResetInPlace,
        ..SessionOptions::default()
    };

    let e = TimetableLogic::add(&store, &user, Weekday::Tuesday, "6:00 – 7:00 am", "Reading")
        .expect("add");

    SessionLogic::check_in(&store, &user, e.id, opts, t0()).expect("check in");
    SessionLogic::complete(&store, &user, e.id, opts, t0() + Duration::minutes(30)).expect("complete");

    let later = t0() + Duration::hours(1);
    let reopened = SessionLogic::check_in(&store, &user, e.id, opts, later).expect("start again");
    assert!(matches!(reopened, CheckInOutcome::Reopened(_)));

    let records = store.list_records(&user).expect("records");
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_completed);
    assert_eq!(records[0].checked_in_at, Some(later));
    assert_eq!(records[0].checked_out_at, None);
}

#[test]
fn test_double_checkin_and_early_complete_are_refused() {
    let (store, user) = signed_in_store();
    let opts = SessionOptions::default();

    let e = TimetableLogic::add(&store, &user, Weekday::Monday, "8:30-9:15pm", "DSA coding")
        .expect("add");

    assert!(matches!(
        SessionLogic::complete(&store, &user, e.id, opts, t0()),
        Err(AppError::NotCheckedIn { .. })
    ));

    SessionLogic::check_in(&store, &user, e.id, opts, t0()).expect("check in");
    assert!(matches!(
        SessionLogic::check_in(&store, &user, e.id, opts, t0()),
        Err(AppError::AlreadyCheckedIn { .. })
    ));

    assert_eq!(store.list_records(&user).expect("records").len(), 1);
}

#[test]
fn test_edit_reverts_state_under_triple_match() {
    let (store, user) = signed_in_store();
    let opts = SessionOptions::default();

    let e = TimetableLogic::add(&store, &user, Weekday::Monday, "8:30-9:15pm", "DSA coding")
        .expect("add");
    SessionLogic::check_in(&store, &user, e.id, opts, t0()).expect("check in");
    SessionLogic::complete(&store, &user, e.id, opts, t0()).expect("complete");

    let changes = EntryChanges {
        focus_area: Some("Graphs".to_string()),
        ..EntryChanges::default()
    };
    let (before, after) = TimetableLogic::edit(&store, &user, e.id, &changes).expect("edit");
    assert_eq!(before.focus_area, "DSA coding");
    assert_eq!(after.focus_area, "Graphs");

    let triple = TimetableLogic::view(&store, &user, MatchStrategy::Triple).expect("view");
    assert_eq!(triple.state_of(e.id), DisplayState::NotStarted);

    let linked = TimetableLogic::view(&store, &user, MatchStrategy::Entry).expect("view");
    assert_eq!(linked.state_of(e.id), DisplayState::Completed);
}

#[test]
fn test_add_rejects_blank_labels() {
    let (store, user) = signed_in_store();

    assert!(matches!(
        TimetableLogic::add(&store, &user, Weekday::Monday, "  ", "DSA coding"),
        Err(AppError::MissingField("time slot"))
    ));
    assert!(matches!(
        TimetableLogic::add(&store, &user, Weekday::Monday, "8:30-9:15pm", ""),
        Err(AppError::MissingField("focus area"))
    ));
    assert!(store.list_entries(&user).expect("entries").is_empty());
}

#[test]
fn test_delete_keeps_records() {
    let (store, user) = signed_in_store();
    let opts = SessionOptions::default();

    let e = TimetableLogic::add(&store, &user, Weekday::Sunday, "10:00 – 11:00 am", "Mock test")
        .expect("add");
    SessionLogic::check_in(&store, &user, e.id, opts, t0()).expect("check in");

    TimetableLogic::delete(&store, &user, e.id).expect("delete");
    assert!(store.get_entry(&user, e.id).expect("get").is_none());
    assert_eq!(store.list_records(&user).expect("records").len(), 1);

    assert!(matches!(
        TimetableLogic::delete(&store, &user, e.id),
        Err(AppError::EntryNotFound(_))
    ));
}

#[test]
fn test_seed_default_only_on_empty_timetable() {
    let (store, user) = signed_in_store();

    let seeded = TimetableLogic::seed_default(&store, &user, false).expect("seed");
    assert_eq!(seeded.len(), 23);

    assert!(matches!(
        TimetableLogic::seed_default(&store, &user, false),
        Err(AppError::TimetableNotEmpty(23))
    ));

    let view = TimetableLogic::view(&store, &user, MatchStrategy::Triple).expect("view");
    let days: Vec<Weekday> = view.groups().iter().map(|g| g.day).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    assert_eq!(view.count(|s| *s == DisplayState::NotStarted), 23);
}

#[test]
fn test_rows_are_scoped_to_user() {
    let (store, alice) = signed_in_store();
    TimetableLogic::add(&store, &alice, Weekday::Monday, "8:30-9:15pm", "DSA coding").expect("add");

    let bob = auth::login(&store, "bob@example.com")
        .expect("login")
        .user()
        .expect("signed in")
        .clone();

    assert!(store.list_entries(&bob).expect("entries").is_empty());
    assert!(matches!(
        SessionLogic::check_in(&store, &bob, 1, SessionOptions::default(), t0()),
        Err(AppError::EntryNotFound(1))
    ));
}

#[test]
fn test_records_newest_first_across_offset_change() {
    let (store, user) = signed_in_store();
    let e = TimetableLogic::add(&store, &user, Weekday::Sunday, "2:00 – 3:00 am", "Night owl")
        .expect("add");

    // 02:30 summer time is 40 minutes before 02:10 winter time on the same night
    let summer = DateTime::parse_from_rfc3339("2025-10-26T02:30:00+02:00")
        .expect("timestamp")
        .with_timezone(&Local);
    let winter = DateTime::parse_from_rfc3339("2025-10-26T02:10:00+01:00")
        .expect("timestamp")
        .with_timezone(&Local);

    let older = store
        .insert_record(&user, &NewRecord::check_in(&e, summer))
        .expect("insert older");
    let newer = store
        .insert_record(&user, &NewRecord::check_in(&e, winter))
        .expect("insert newer");

    let records = store.list_records(&user).expect("records");
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(records[0].created_at, winter);
    assert_eq!(records[1].checked_in_at, Some(summer));
}

#[test]
fn test_timestamps_stored_as_utc_text() {
    let (store, user) = signed_in_store();
    let e = TimetableLogic::add(&store, &user, Weekday::Monday, "8:30-9:15pm", "DSA coding")
        .expect("add");
    SessionLogic::check_in(&store, &user, e.id, SessionOptions::default(), t0()).expect("check in");

    let raw: String = store
        .conn
        .query_row("SELECT created_at FROM session_records", [], |row| row.get(0))
        .expect("created_at");
    assert!(raw.ends_with('Z'), "not UTC: {raw}");
    assert_eq!(
        DateTime::parse_from_rfc3339(&raw).expect("rfc3339").with_timezone(&Local),
        t0()
    );
}

#[test]
fn test_migration_log_rows_use_rfc3339_dates() {
    let store = SqliteStore::open_in_memory().expect("open store");

    let date: String = store
        .conn
        .query_row(
            "SELECT date FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("migration row");
    assert!(
        DateTime::parse_from_rfc3339(&date).is_ok(),
        "not RFC3339: {date}"
    );
}
