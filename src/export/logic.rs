use crate::core::ports::Store;
use crate::core::tracker::decode_workouts;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::Workout;
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the persisted workout list under `key` to `file`.
    ///
    /// Unreadable stored data exports as an empty list, matching what the
    /// tracker itself would load. Returns the number of exported workouts.
    pub fn export<S: Store>(
        store: &mut S,
        key: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let workouts: Vec<Workout> = store
            .read_all(key)?
            .as_deref()
            .and_then(decode_workouts)
            .unwrap_or_default();

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &workouts)?,
            ExportFormat::Json => json::write_json(&path, &workouts)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), workouts.len(), &path);
        Ok(workouts.len())
    }
}
