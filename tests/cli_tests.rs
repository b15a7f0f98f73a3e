use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, init_and_login, rsp, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rsp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_commands_require_login() {
    let db_path = setup_test_db("commands_require_login");

    rsp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Please log in"));

    rsp()
        .args(["--db", &db_path, "add", "Monday", "8:30 – 9:15 pm", "DSA coding"])
        .assert()
        .failure()
        .stderr(contains("Please log in"));
}

#[test]
fn test_login_whoami_logout() {
    let db_path = setup_test_db("login_whoami_logout");
    init_and_login(&db_path);

    rsp()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("student@example.com"));

    rsp()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out successfully"));

    rsp()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not signed in."));
}

#[test]
fn test_login_rejects_invalid_email() {
    let db_path = setup_test_db("login_invalid_email");

    rsp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsp()
        .args(["--db", &db_path, "login", "not-an-email"])
        .assert()
        .failure()
        .stderr(contains("Invalid email address"));
}

#[test]
fn test_add_rejects_blank_fields() {
    let db_path = setup_test_db("add_blank_fields");
    init_and_login(&db_path);

    rsp()
        .args(["--db", &db_path, "add", "Monday", "   ", "DSA coding"])
        .assert()
        .failure()
        .stderr(contains("Please fill in all fields"));

    rsp()
        .args(["--db", &db_path, "add", "Funday", "8:30 – 9:15 pm", "DSA coding"])
        .assert()
        .failure()
        .stderr(contains("Invalid day"));
}

#[test]
fn test_list_groups_by_day_in_week_order() {
    let db_path = setup_test_db("list_groups_by_day");
    init_and_login(&db_path);

    add_entry(&db_path, "Wednesday", "8:30 – 9:15 pm", "Linear algebra");
    add_entry(&db_path, "mon", "8:30 – 9:15 pm", "DSA coding");
    add_entry(&db_path, "Monday", "9:20 – 10:00 pm", "DBMS");

    let output = rsp()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let monday = stdout.find("=== Monday ===").expect("Monday header");
    let wednesday = stdout.find("=== Wednesday ===").expect("Wednesday header");
    assert!(monday < wednesday);
    assert!(!stdout.contains("=== Tuesday ==="));
    assert!(stdout.contains("3 sessions, 0 checked in, 0 completed"));
}

#[test]
fn test_list_single_day_filter() {
    let db_path = setup_test_db("list_single_day");
    init_and_login(&db_path);

    add_entry(&db_path, "Monday", "8:30 – 9:15 pm", "DSA coding");
    add_entry(&db_path, "Friday", "7:00 – 8:00 pm", "Revision");

    rsp()
        .args(["--db", &db_path, "list", "--day", "fri"])
        .assert()
        .success()
        .stdout(contains("Revision").and(contains("DSA coding").not()));
}

#[test]
fn test_checkin_complete_start_again_flow() {
    let db_path = setup_test_db("checkin_complete_flow");
    init_and_login(&db_path);
    add_entry(&db_path, "Monday", "8:30 – 9:15 pm", "DSA coding");

    // Completing before checking in is refused
    rsp()
        .args(["--db", &db_path, "complete", "1"])
        .assert()
        .failure()
        .stderr(contains("No active check-in"));

    rsp()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .success()
        .stdout(contains("Checked in! Time to focus!"));

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("checked in"));

    // A second check-in on an open slot is refused
    rsp()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .failure()
        .stderr(contains("Already checked in"));

    rsp()
        .args(["--db", &db_path, "complete", "1"])
        .assert()
        .success()
        .stdout(contains("Session completed!"));

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("completed").and(contains("start again")));

    rsp()
        .args(["--db", &db_path, "checkin", "1"])
        .assert()
        .success()
        .stdout(contains("Started again! New session logged."));

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("1 sessions, 1 checked in, 0 completed"));
}

#[test]
fn test_start_again_reset_policy_reopens_record() {
    let db_path = setup_test_db("start_again_reset");
    init_and_login(&db_path);
    add_entry(&db_path, "Tue", "6:00 – 7:00 am", "Reading");

    rsp().args(["--db", &db_path, "checkin", "1"]).assert().success();
    rsp().args(["--db", &db_path, "complete", "1"]).assert().success();

    rsp()
        .args(["--db", &db_path, "checkin", "1", "--policy", "reset"])
        .assert()
        .success()
        .stdout(contains("Previous session reopened"));

    let output = rsp()
        .args(["--db", &db_path, "history"])
        .output()
        .expect("run history");
    assert!(output.status.success());

    // Only one record exists: the reopened one
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = stdout.lines().filter(|l| l.contains("Reading")).count();
    assert_eq!(rows, 1);
}

#[test]
fn test_checkin_unknown_entry() {
    let db_path = setup_test_db("checkin_unknown_entry");
    init_and_login(&db_path);

    rsp()
        .args(["--db", &db_path, "checkin", "42"])
        .assert()
        .failure()
        .stderr(contains("Timetable entry #42 not found"));
}

#[test]
fn test_edit_resets_displayed_state() {
    let db_path = setup_test_db("edit_resets_state");
    init_and_login(&db_path);
    add_entry(&db_path, "Monday", "8:30 – 9:15 pm", "DSA coding");

    rsp().args(["--db", &db_path, "checkin", "1"]).assert().success();
    rsp().args(["--db", &db_path, "complete", "1"]).assert().success();

    rsp()
        .args(["--db", &db_path, "edit", "1", "--focus", "Graphs"])
        .assert()
        .success()
        .stdout(contains("Session #1 updated"));

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Graphs").and(contains("0 completed")));

    // The old record is still in the history
    rsp()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("DSA coding"));
}

#[test]
fn test_edit_without_changes_is_a_no_op() {
    let db_path = setup_test_db("edit_without_changes");
    init_and_login(&db_path);
    add_entry(&db_path, "Monday", "8:30 – 9:15 pm", "DSA coding");

    rsp()
        .args(["--db", &db_path, "edit", "1"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_del_keeps_history() {
    let db_path = setup_test_db("del_keeps_history");
    init_and_login(&db_path);
    add_entry(&db_path, "Sunday", "10:00 – 11:00 am", "Mock test");

    rsp().args(["--db", &db_path, "checkin", "1"]).assert().success();

    rsp()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("Session #1 deleted"));

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Your timetable is empty."));

    rsp()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("Mock test"));
}

#[test]
fn test_seed_default_timetable() {
    let db_path = setup_test_db("seed_default");
    init_and_login(&db_path);

    rsp()
        .args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("Added 23 sessions"));

    // Seeding again without --force is refused
    rsp()
        .args(["--db", &db_path, "seed"])
        .assert()
        .failure()
        .stderr(contains("already has 23 entries"));

    rsp()
        .args(["--db", &db_path, "list", "--day", "Monday"])
        .assert()
        .success()
        .stdout(contains("University (long day)"));
}

#[test]
fn test_users_do_not_see_each_other() {
    let db_path = setup_test_db("users_isolated");
    init_and_login(&db_path);
    add_entry(&db_path, "Monday", "8:30 – 9:15 pm", "DSA coding");

    rsp()
        .args(["--db", &db_path, "login", "other@example.com"])
        .assert()
        .success();

    rsp()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Your timetable is empty."));
}

#[test]
fn test_list_today_shows_only_todays_sessions() {
    let db_path = setup_test_db("list_today");
    init_and_login(&db_path);

    let now = chrono::Local::now();
    let today = now.format("%A").to_string();
    let tomorrow = (now + chrono::Duration::days(1)).format("%A").to_string();

    add_entry(&db_path, &today, "7:00 – 8:00 am", "Morning review");
    add_entry(&db_path, &tomorrow, "7:00 – 8:00 am", "Tomorrow's review");

    rsp()
        .args(["--db", &db_path, "list", "--today"])
        .assert()
        .success()
        .stdout(
            contains(format!("=== {today} ==="))
                .and(contains("Morning review"))
                .and(contains(format!("=== {tomorrow} ===")).not())
                .and(contains("Tomorrow's review").not()),
        );
}
