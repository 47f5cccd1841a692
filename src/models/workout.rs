//! Workout records.
//!
//! A workout is immutable once built except for its click counter. The
//! derived metric (pace or speed) and the description are computed once at
//! construction and stored, so a record read back from storage carries
//! exactly what was written.

use super::{coords::Coords, kind::WorkoutKind};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind-specific payload. Serialized inline with the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence: f64, // steps/min
        pace: f64,    // min/km
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64, // m
        speed: f64, // km/h
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    #[serde(rename = "date")]
    created_at: DateTime<Local>,
    coords: Coords,
    distance: f64, // km
    duration: f64, // min
    description: String,
    #[serde(default)]
    clicks: u32,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    pub fn running(
        id: String,
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence,
            pace: duration / distance,
        };
        Self::build(id, created_at, coords, distance, duration, details)
    }

    pub fn cycling(
        id: String,
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain,
            speed: distance / (duration / 60.0),
        };
        Self::build(id, created_at, coords, distance, duration, details)
    }

    /// Build the variant matching `kind`; `param` is cadence or elevation gain.
    pub fn new(
        kind: WorkoutKind,
        id: String,
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        param: f64,
    ) -> Self {
        match kind {
            WorkoutKind::Running => {
                Self::running(id, created_at, coords, distance, duration, param)
            }
            WorkoutKind::Cycling => {
                Self::cycling(id, created_at, coords, distance, duration, param)
            }
        }
    }

    fn build(
        id: String,
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        details: WorkoutDetails,
    ) -> Self {
        let kind = match details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        };
        Self {
            id,
            description: describe(kind, &created_at),
            created_at,
            coords,
            distance,
            duration,
            clicks: 0,
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// e.g. "Running on April 14".
    pub fn describe(&self) -> &str {
        &self.description
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Register one interaction (selection from the list).
    pub fn activate(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn cadence(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => Some(cadence),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { pace, .. } => pace,
            WorkoutDetails::Cycling { speed, .. } => speed,
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn kind_param(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => cadence,
            WorkoutDetails::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }

    pub fn icon(&self) -> &'static str {
        self.kind().icon()
    }

    /// Text shown in the marker popup.
    pub fn popup_content(&self) -> String {
        format!("{} {}", self.icon(), self.description)
    }
}

fn describe(kind: WorkoutKind, at: &DateTime<Local>) -> String {
    format!("{} on {}", kind.label(), at.format("%B %-d"))
}
