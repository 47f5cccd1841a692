use predicates::str::contains;
use std::fs;

mod common;
use common::{add_workout, init_db, mapty, setup_test_db, temp_out};

fn seed(db_path: &str) -> (String, String) {
    init_db(db_path);
    let run = add_workout(
        db_path,
        &["running", "--distance", "5", "--duration", "30", "--cadence", "170"],
    );
    let ride = add_workout(
        db_path,
        &["cycling", "--distance", "5", "--duration", "10", "--elevation", "-20"],
    );
    (run, ride)
}

#[test]
fn test_export_json() {
    let (tmp, db_path) = setup_test_db();
    let (run, ride) = seed(&db_path);
    let out = temp_out(&tmp, "json");

    mapty()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 workout(s) written"));

    let content = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let list = value.as_array().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], run.as_str());
    assert_eq!(list[0]["type"], "running");
    assert_eq!(list[0]["pace"], 6.0);
    assert_eq!(list[1]["id"], ride.as_str());
    assert_eq!(list[1]["speed"], 30.0);
    assert_eq!(list[1]["elevationGain"], -20.0);
}

#[test]
fn test_export_csv() {
    let (tmp, db_path) = setup_test_db();
    let (run, _) = seed(&db_path);
    let out = temp_out(&tmp, "csv");

    mapty()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "id,date,type,lat,lng,distance_km,duration_min,pace_min_km,speed_km_h,cadence_spm,elevation_m,clicks,description"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with(&format!("{run},")));
    assert!(first.contains(",running,"));
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let (tmp, db_path) = setup_test_db();
    seed(&db_path);
    let out = temp_out(&tmp, "json");
    fs::write(&out, "keep me").unwrap();

    mapty()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    mapty()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}
