use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{HOME, add_workout, init_db, mapty, setup_test_db};

#[test]
fn test_init_creates_database() {
    let (_tmp, db_path) = setup_test_db();

    mapty()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_running_and_list() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--position",
            HOME,
            "add",
            "running",
            "--distance",
            "5",
            "--duration",
            "30",
            "--cadence",
            "170",
        ])
        .assert()
        .success()
        .stdout(contains("Running on").and(contains("recorded (id ")));

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Running on"))
        .stdout(contains("6.0 min/km"))
        .stdout(contains("170 spm"))
        .stdout(contains("Total: 1 workout(s)"));
}

#[test]
fn test_add_cycling_with_negative_elevation() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    add_workout(
        &db_path,
        &[
            "cycling",
            "--distance",
            "5",
            "--duration",
            "10",
            "--elevation",
            "-20",
            "--lat",
            "38.72",
            "--lng",
            "-9.14",
        ],
    );

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Cycling on"))
        .stdout(contains("30.0 km/h"))
        .stdout(contains("-20 m"));
}

#[test]
fn test_add_rejects_zero_distance() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--position",
            HOME,
            "add",
            "running",
            "--distance",
            "0",
            "--duration",
            "30",
            "--cadence",
            "170",
        ])
        .assert()
        .failure()
        .stdout(contains("Inputs have to be positive numbers."))
        .stderr(contains("Workout not recorded"));

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn test_add_rejects_running_without_cadence() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--position",
            HOME,
            "add",
            "running",
            "--distance",
            "5",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stdout(contains("Inputs have to be positive numbers."));
}

#[test]
fn test_add_without_position_fails() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "add",
            "cycling",
            "--distance",
            "20",
            "--duration",
            "60",
            "--elevation",
            "100",
        ])
        .assert()
        .failure()
        .stdout(contains("Could not get your position"))
        .stderr(contains("map is not available"));
}

#[test]
fn test_select_counts_interactions() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    let id = add_workout(
        &db_path,
        &["running", "--distance", "5", "--duration", "30", "--cadence", "170"],
    );

    mapty()
        .args(["--db", &db_path, "--position", HOME, "select", &id])
        .assert()
        .success()
        .stdout(contains("Map moved to"))
        .stdout(contains("selected (1 time(s))"));

    mapty()
        .args(["--db", &db_path, "--position", HOME, "select", &id])
        .assert()
        .success()
        .stdout(contains("selected (2 time(s))"));

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("(selected 2 times)"));
}

#[test]
fn test_select_unknown_id_is_ignored() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    mapty()
        .args(["--db", &db_path, "--position", HOME, "select", "0000000000"])
        .assert()
        .success()
        .stdout(contains("No workout with id 0000000000."))
        .stdout(contains("Map moved to").not());
}

#[test]
fn test_map_replays_markers() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    add_workout(
        &db_path,
        &["running", "--distance", "5", "--duration", "30", "--cadence", "170"],
    );
    add_workout(
        &db_path,
        &["cycling", "--distance", "20", "--duration", "60", "--elevation", "300"],
    );

    mapty()
        .args(["--db", &db_path, "--position", HOME, "map"])
        .assert()
        .success()
        .stdout(contains("Map centered on"))
        .stdout(contains("📍 🏃‍♂️ Running on"))
        .stdout(contains("📍 🚴‍♀️ Cycling on"))
        .stdout(contains("2 marker(s) on the map"));
}

#[test]
fn test_reset_deletes_everything() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    add_workout(
        &db_path,
        &["running", "--distance", "5", "--duration", "30", "--cadence", "170"],
    );
    add_workout(
        &db_path,
        &["running", "--distance", "10", "--duration", "55", "--cadence", "165"],
    );

    mapty()
        .args(["--db", &db_path, "reset"])
        .assert()
        .success()
        .stdout(contains("All workouts deleted (2)."));

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn test_log_records_operations() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    add_workout(
        &db_path,
        &["running", "--distance", "5", "--duration", "30", "--cadence", "170"],
    );
    mapty().args(["--db", &db_path, "reset"]).assert().success();

    mapty()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("1 workout(s) deleted"));
}

#[test]
fn test_corrupted_storage_lists_nothing() {
    let (_tmp, db_path) = setup_test_db();
    init_db(&db_path);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES ('workouts', '{oops', '')",
        [],
    )
    .unwrap();
    drop(conn);

    mapty()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn test_invalid_position_is_a_usage_error() {
    mapty()
        .args(["--position", "somewhere", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}
