//! Contracts of the systems the tracker drives but does not implement:
//! the map widget, the workout list/form view, the location service and
//! the key/value store.

use crate::errors::AppResult;
use crate::models::{Coords, Workout, WorkoutKind};

/// Popup options of a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerStyle {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            class_name: format!("{}-popup", kind.as_str()),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// How the map moves when re-centered on a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            animate: true,
            pan_duration_secs: 1.0,
        }
    }
}

/// Map widget. Clicks are delivered by the driver through
/// [`Tracker::on_map_clicked`](crate::core::tracker::Tracker::on_map_clicked).
pub trait MapWidget {
    fn init_view(&mut self, center: Coords, zoom: u8);
    fn add_marker(&mut self, at: Coords, popup: &str, style: &MarkerStyle);
    fn recenter(&mut self, center: Coords, zoom: u8, animation: &Animation);
}

/// Workout list plus the new-workout form.
pub trait WorkoutView {
    fn render_workout(&mut self, workout: &Workout);
    fn show_form(&mut self, at: Coords);
    /// Hide the form and clear its inputs.
    fn hide_form(&mut self);
    /// Blocking notification to the user.
    fn notify(&mut self, message: &str);
}

/// Answers "where am I" once per call, with no retry.
pub trait LocationService {
    fn resolve_current_position(&mut self) -> Option<Coords>;
}

/// Persistent key/value store. A value is always written whole.
pub trait Store {
    fn write_all(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn read_all(&mut self, key: &str) -> AppResult<Option<String>>;
    fn clear(&mut self, key: &str) -> AppResult<()>;
}
