//! The tracker controller.
//!
//! Owns the in-memory workout list and drives the interaction state
//! machine:
//!
//! ```text
//! AwaitingLocation --location resolved--> Ready --map click--> FormOpen(C)
//! FormOpen(C) --valid submit--> Ready          (workout appended + persisted)
//! FormOpen(C) --invalid submit--> FormOpen(C)  (user notified)
//! any --reset--> AwaitingLocation              (list and storage cleared)
//! ```
//!
//! Every handler runs to completion; nothing here blocks or spawns.

use crate::core::ports::{Animation, LocationService, MapWidget, MarkerStyle, Store, WorkoutView};
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, IdGenerator, Workout, WorkoutForm};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const DEFAULT_ZOOM_LEVEL: u8 = 13;

pub const MSG_INVALID_INPUT: &str = "Inputs have to be positive numbers.";
pub const MSG_NO_POSITION: &str = "Could not get your position";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    AwaitingLocation,
    Ready,
    /// Form shown for the last map click.
    FormOpen(Coords),
}

/// Outcome of a form submission that reached validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(String),
    Rejected,
}

pub struct Tracker<S, M, V> {
    store: S,
    map: M,
    view: V,
    storage_key: String,
    zoom: u8,
    workouts: Vec<Workout>,
    state: TrackerState,
    position: Option<Coords>,
    ids: IdGenerator,
    clock: fn() -> DateTime<Local>,
}

impl<S: Store, M: MapWidget, V: WorkoutView> Tracker<S, M, V> {
    pub fn new(store: S, map: M, view: V, storage_key: impl Into<String>, zoom: u8) -> Self {
        Self {
            store,
            map,
            view,
            storage_key: storage_key.into(),
            zoom,
            workouts: Vec::new(),
            state: TrackerState::AwaitingLocation,
            position: None,
            ids: IdGenerator::new(),
            clock: Local::now,
        }
    }

    /// Replace the clock used to stamp new workouts.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    // ------------------------------------------------
    // Accessors
    // ------------------------------------------------

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Last map click, while the form is open.
    pub fn pending_click(&self) -> Option<Coords> {
        match self.state {
            TrackerState::FormOpen(c) => Some(c),
            _ => None,
        }
    }

    /// User position, once the location service has answered.
    pub fn position(&self) -> Option<Coords> {
        self.position
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ------------------------------------------------
    // Storage round trip
    // ------------------------------------------------

    /// Load the persisted list and render each entry in the list view.
    ///
    /// Markers are not drawn here: the map does not exist before the
    /// location is known, so they are replayed by `on_location_resolved`.
    /// Missing or unreadable data leaves the list empty.
    pub fn load_persisted(&mut self) -> AppResult<usize> {
        let raw = self.store.read_all(&self.storage_key)?;

        let Some(workouts) = raw.as_deref().and_then(decode_workouts) else {
            debug!(key = %self.storage_key, "no usable persisted workouts");
            return Ok(0);
        };

        for w in &workouts {
            self.ids.observe(w.id());
            self.view.render_workout(w);
        }
        self.workouts = workouts;

        info!(count = self.workouts.len(), "loaded persisted workouts");
        Ok(self.workouts.len())
    }

    /// Write the whole list as one value.
    pub fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.workouts)?;
        self.store.write_all(&self.storage_key, &json)?;
        debug!(count = self.workouts.len(), "persisted workouts");
        Ok(())
    }

    // ------------------------------------------------
    // Location
    // ------------------------------------------------

    /// Ask the location service once and route the answer.
    pub fn locate<L: LocationService>(&mut self, location: &mut L) -> bool {
        match location.resolve_current_position() {
            Some(coords) => {
                self.on_location_resolved(coords);
                true
            }
            None => {
                self.on_location_failed();
                false
            }
        }
    }

    pub fn on_location_resolved(&mut self, coords: Coords) {
        self.position = Some(coords);
        self.map.init_view(coords, self.zoom);
        if self.state == TrackerState::AwaitingLocation {
            self.state = TrackerState::Ready;
        }

        for w in &self.workouts {
            self.map
                .add_marker(w.coords(), &w.popup_content(), &MarkerStyle::for_kind(w.kind()));
        }
        debug!(%coords, markers = self.workouts.len(), "map ready");
    }

    /// The tracker stays in `AwaitingLocation`; there is no retry.
    pub fn on_location_failed(&mut self) {
        warn!("location unavailable");
        self.view.notify(MSG_NO_POSITION);
    }

    // ------------------------------------------------
    // Map and form
    // ------------------------------------------------

    pub fn on_map_clicked(&mut self, coords: Coords) -> AppResult<()> {
        if self.state == TrackerState::AwaitingLocation {
            return Err(AppError::MapUnavailable);
        }
        self.state = TrackerState::FormOpen(coords);
        self.view.show_form(coords);
        Ok(())
    }

    /// Validate the form and record a new workout at the pending click.
    ///
    /// Invalid input, or a pace/speed that does not fit in an `f64`, notifies
    /// the user and leaves the form open; nothing is created or persisted.
    pub fn on_form_submitted(&mut self, form: &WorkoutForm) -> AppResult<Submission> {
        let TrackerState::FormOpen(at) = self.state else {
            return Err(AppError::FormNotOpen);
        };

        if !form.is_valid() {
            debug!(?form, "rejected form");
            self.view.notify(MSG_INVALID_INPUT);
            return Ok(Submission::Rejected);
        }

        let now = (self.clock)();
        let workout = Workout::new(
            form.kind,
            self.ids.next_id(now),
            now,
            at,
            form.distance,
            form.duration,
            form.kind_param(),
        );
        // an overflowing pace or speed would be stored as null and spoil the whole list
        if !workout.metric().is_finite() {
            debug!(?form, metric = workout.metric(), "rejected form: metric out of range");
            self.view.notify(MSG_INVALID_INPUT);
            return Ok(Submission::Rejected);
        }
        let id = workout.id().to_string();

        self.map.add_marker(
            workout.coords(),
            &workout.popup_content(),
            &MarkerStyle::for_kind(workout.kind()),
        );
        self.view.render_workout(&workout);
        self.workouts.push(workout);

        self.view.hide_form();
        self.state = TrackerState::Ready;

        self.persist()?;

        info!(%id, kind = %form.kind, "workout recorded");
        Ok(Submission::Created(id))
    }

    // ------------------------------------------------
    // Selection
    // ------------------------------------------------

    /// Move the map to the workout and count the interaction.
    /// Unknown ids are ignored.
    pub fn on_workout_selected(&mut self, id: &str) -> bool {
        let map_ready = self.state != TrackerState::AwaitingLocation;

        let Some(workout) = self.workouts.iter_mut().find(|w| w.id() == id) else {
            debug!(%id, "selected id not found");
            return false;
        };

        if map_ready {
            self.map
                .recenter(workout.coords(), self.zoom, &Animation::default());
        }
        workout.activate();
        true
    }

    // ------------------------------------------------
    // Reset
    // ------------------------------------------------

    /// Clear storage and start over from `AwaitingLocation`.
    ///
    /// The caller re-runs location resolution afterwards, as on startup.
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.store.clear(&self.storage_key)?;

        self.workouts.clear();
        self.state = TrackerState::AwaitingLocation;
        self.position = None;

        self.load_persisted()?;
        info!("tracker reset");
        Ok(())
    }
}

/// Parse a persisted list. Anything that is not a list of workout records
/// yields `None`.
pub fn decode_workouts(raw: &str) -> Option<Vec<Workout>> {
    match serde_json::from_str::<Vec<Workout>>(raw) {
        Ok(list) => Some(list),
        Err(e) => {
            debug!(error = %e, "discarding malformed persisted data");
            None
        }
    }
}
