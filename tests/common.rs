#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use mapty::core::ports::{Animation, MapWidget, MarkerStyle, WorkoutView};
use mapty::core::tracker::{DEFAULT_STORAGE_KEY, DEFAULT_ZOOM_LEVEL, Tracker};
use mapty::db::MemoryStore;
use mapty::models::{Coords, Workout};
use std::sync::LazyLock;
use tempfile::TempDir;

/// Scratch HOME shared by every run of the binary in this test process,
/// so no user config is read.
static SCRATCH_HOME: LazyLock<TempDir> =
    LazyLock::new(|| TempDir::new().expect("failed to create scratch HOME"));

/// The binary, with HOME pointed at the scratch dir.
pub fn mapty() -> Command {
    let mut cmd = cargo_bin_cmd!("mapty");
    cmd.env("HOME", SCRATCH_HOME.path()).env_remove("RUST_LOG");
    cmd
}

/// Fresh temp dir and a DB path inside it; the dir is removed when dropped.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = dir.path().join("mapty.sqlite").to_string_lossy().to_string();
    (dir, db_path)
}

/// Output file path inside the test's temp dir
pub fn temp_out(dir: &TempDir, ext: &str) -> String {
    dir.path()
        .join(format!("out.{ext}"))
        .to_string_lossy()
        .to_string()
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    mapty()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub const HOME: &str = "39.399872,-8.224454";

pub fn home() -> Coords {
    Coords::new(39.399872, -8.224454).unwrap()
}

pub fn april_14() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap()
}

/// Map widget that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views: Vec<(Coords, u8)>,
    pub markers: Vec<(Coords, String, MarkerStyle)>,
    pub recenters: Vec<(Coords, u8, Animation)>,
}

impl MapWidget for RecordingMap {
    fn init_view(&mut self, center: Coords, zoom: u8) {
        self.views.push((center, zoom));
    }

    fn add_marker(&mut self, at: Coords, popup: &str, style: &MarkerStyle) {
        self.markers.push((at, popup.to_string(), style.clone()));
    }

    fn recenter(&mut self, center: Coords, zoom: u8, animation: &Animation) {
        self.recenters.push((center, zoom, animation.clone()));
    }
}

/// List/form view that records every call.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub rendered: Vec<String>,
    pub forms_shown: Vec<Coords>,
    pub forms_hidden: usize,
    pub notifications: Vec<String>,
}

impl WorkoutView for RecordingView {
    fn render_workout(&mut self, workout: &Workout) {
        self.rendered.push(workout.id().to_string());
    }

    fn show_form(&mut self, at: Coords) {
        self.forms_shown.push(at);
    }

    fn hide_form(&mut self) {
        self.forms_hidden += 1;
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

pub type TestTracker = Tracker<MemoryStore, RecordingMap, RecordingView>;

pub fn tracker_with(store: MemoryStore) -> TestTracker {
    Tracker::new(
        store,
        RecordingMap::default(),
        RecordingView::default(),
        DEFAULT_STORAGE_KEY,
        DEFAULT_ZOOM_LEVEL,
    )
    .with_clock(april_14)
}

/// Fresh tracker with an empty store, location resolved at `home()`.
pub fn ready_tracker() -> TestTracker {
    let mut tracker = tracker_with(MemoryStore::new());
    tracker.load_persisted().unwrap();
    tracker.on_location_resolved(home());
    tracker
}

/// Pull the workout id out of an `add` confirmation line ("... (id 1234567890)").
pub fn extract_id(stdout: &str) -> String {
    let start = stdout.find("(id ").expect("no id in output") + 4;
    let end = stdout[start..].find(')').expect("unterminated id") + start;
    stdout[start..end].to_string()
}

/// Add a workout through the CLI and return its id.
pub fn add_workout(db_path: &str, args: &[&str]) -> String {
    let out = mapty()
        .args(["--db", db_path, "--position", HOME, "add"])
        .args(args)
        .output()
        .expect("failed to run add");
    assert!(out.status.success(), "add failed: {:?}", out);
    extract_id(&String::from_utf8_lossy(&out.stdout))
}
