use crate::errors::AppResult;
use crate::export::model::WorkoutExport;
use crate::models::Workout;
use std::path::Path;

/// Write one row per workout, with a header line.
pub(crate) fn write_csv(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;
    for w in workouts {
        wtr.serialize(WorkoutExport::from(w))?;
    }
    wtr.flush()?;
    Ok(())
}
