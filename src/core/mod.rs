pub mod log;
pub mod ports;
pub mod tracker;

pub use ports::{Animation, LocationService, MapWidget, MarkerStyle, Store, WorkoutView};
pub use tracker::{Submission, Tracker, TrackerState};
