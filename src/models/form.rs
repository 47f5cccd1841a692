use super::kind::WorkoutKind;
use crate::utils::number::parse_form_number;

/// Values of the new-workout form at submit time.
///
/// Both kind-specific inputs are carried; only the one matching `kind` is
/// used and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    pub cadence: f64,
    pub elevation: f64,
}

impl WorkoutForm {
    /// Form with the kind-specific value already placed in the right field.
    pub fn new(kind: WorkoutKind, distance: f64, duration: f64, param: f64) -> Self {
        let (cadence, elevation) = match kind {
            WorkoutKind::Running => (param, 0.0),
            WorkoutKind::Cycling => (0.0, param),
        };
        Self {
            kind,
            distance,
            duration,
            cadence,
            elevation,
        }
    }

    /// Build the form from raw text inputs, coercing each one like a numeric
    /// form field: blank is 0, garbage is NaN.
    pub fn from_fields(
        kind: WorkoutKind,
        distance: &str,
        duration: &str,
        cadence: &str,
        elevation: &str,
    ) -> Self {
        Self {
            kind,
            distance: parse_form_number(distance),
            duration: parse_form_number(duration),
            cadence: parse_form_number(cadence),
            elevation: parse_form_number(elevation),
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn kind_param(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running => self.cadence,
            WorkoutKind::Cycling => self.elevation,
        }
    }

    /// Running: distance, duration and cadence finite and positive.
    /// Cycling: all three finite, but only distance and duration must be
    /// positive; elevation gain may be zero or negative.
    pub fn is_valid(&self) -> bool {
        match self.kind {
            WorkoutKind::Running => {
                let inputs = [self.distance, self.duration, self.cadence];
                all_finite(&inputs) && all_positive(&inputs)
            }
            WorkoutKind::Cycling => {
                all_finite(&[self.distance, self.duration, self.elevation])
                    && all_positive(&[self.distance, self.duration])
            }
        }
    }
}

fn all_finite(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| v.is_finite())
}

fn all_positive(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| *v > 0.0)
}
