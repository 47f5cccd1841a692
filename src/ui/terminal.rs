//! Terminal stand-ins for the map widget, the workout list and the
//! location service.

use crate::core::ports::{Animation, LocationService, MapWidget, MarkerStyle, WorkoutView};
use crate::models::{Coords, Workout};
use crate::ui::messages::{info, warning};
use crate::ui::render::workout_card;
use tracing::debug;

/// A marker placed on the terminal map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub popup: String,
    pub class_name: String,
}

/// Keeps the map view and markers; prints them when `show_markers` is set.
/// Re-centering is always printed.
#[derive(Debug, Default)]
pub struct TerminalMap {
    show_markers: bool,
    view: Option<(Coords, u8)>,
    markers: Vec<Marker>,
}

impl TerminalMap {
    pub fn new(show_markers: bool) -> Self {
        Self {
            show_markers,
            ..Self::default()
        }
    }

    pub fn view(&self) -> Option<(Coords, u8)> {
        self.view
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Drop the view and every marker.
    pub fn clear(&mut self) {
        self.view = None;
        self.markers.clear();
    }
}

impl MapWidget for TerminalMap {
    fn init_view(&mut self, center: Coords, zoom: u8) {
        debug!(%center, zoom, "map view initialized");
        // a new map starts without markers
        self.markers.clear();
        self.view = Some((center, zoom));
        if self.show_markers {
            info(format!("🗺️  Map centered on ({center}), zoom {zoom}"));
        }
    }

    fn add_marker(&mut self, at: Coords, popup: &str, style: &MarkerStyle) {
        if self.show_markers {
            println!("📍 {popup}  ({at})");
        }
        self.markers.push(Marker {
            at,
            popup: popup.to_string(),
            class_name: style.class_name.clone(),
        });
    }

    fn recenter(&mut self, center: Coords, zoom: u8, animation: &Animation) {
        debug!(%center, zoom, animate = animation.animate, "map recentered");
        self.view = Some((center, zoom));
        info(format!("🗺️  Map moved to ({center}), zoom {zoom}"));
    }
}

/// Workout list and form on the terminal.
///
/// Entries are kept newest first, the way new items are inserted at the
/// top of the list. With `echo` on, each entry is also printed as soon as
/// it is rendered.
#[derive(Debug, Default)]
pub struct TerminalList {
    echo: bool,
    entries: Vec<String>,
    form_open: bool,
}

impl TerminalList {
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            ..Self::default()
        }
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Print every entry, newest first.
    pub fn print_all(&self) {
        for entry in &self.entries {
            println!("{entry}\n");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.form_open = false;
    }
}

impl WorkoutView for TerminalList {
    fn render_workout(&mut self, workout: &Workout) {
        let card = workout_card(workout);
        if self.echo {
            println!("{card}\n");
        }
        self.entries.insert(0, card);
    }

    fn show_form(&mut self, at: Coords) {
        self.form_open = true;
        if self.echo {
            info(format!(
                "📝 New workout at ({at}): submit <running|cycling> <distance km> <duration min> <cadence spm|elevation m>"
            ));
        }
    }

    fn hide_form(&mut self) {
        self.form_open = false;
    }

    fn notify(&mut self, message: &str) {
        warning(message);
    }
}

/// Location service answering with a fixed position (or never).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Option<Coords>);

impl LocationService for FixedLocation {
    fn resolve_current_position(&mut self) -> Option<Coords> {
        self.0
    }
}
