use crate::models::Workout;
use serde::Serialize;

/// Flat row for CSV export; kind-specific columns are empty when they do
/// not apply.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkoutExport {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub pace_min_km: Option<f64>,
    pub speed_km_h: Option<f64>,
    pub cadence_spm: Option<f64>,
    pub elevation_m: Option<f64>,
    pub clicks: u32,
    pub description: String,
}

impl From<&Workout> for WorkoutExport {
    fn from(w: &Workout) -> Self {
        let coords = w.coords();
        Self {
            id: w.id().to_string(),
            date: w.created_at().to_rfc3339(),
            kind: w.kind().as_str().to_string(),
            lat: coords.lat,
            lng: coords.lng,
            distance_km: w.distance(),
            duration_min: w.duration(),
            pace_min_km: w.pace(),
            speed_km_h: w.speed(),
            cadence_spm: w.cadence(),
            elevation_m: w.elevation_gain(),
            clicks: w.clicks(),
            description: w.describe().to_string(),
        }
    }
}
