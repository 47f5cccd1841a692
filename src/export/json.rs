use crate::errors::AppResult;
use crate::models::Workout;
use std::path::Path;

/// Pretty JSON in the same record layout used for storage.
pub(crate) fn write_json(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(workouts)?;
    std::fs::write(path, json)?;
    Ok(())
}
