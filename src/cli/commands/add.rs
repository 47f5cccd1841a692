use crate::cli::commands::{location, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::Submission;
use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, WorkoutForm};
use crate::ui::messages::success;
use crate::ui::{TerminalList, TerminalMap};

/// Record a workout: one map click followed by one form submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        distance,
        duration,
        cadence,
        elevation,
        lat,
        lng,
    } = cmd
    {
        //
        // 1. Startup: stored list, then location → map
        //
        let mut tracker = open_tracker(cfg, TerminalMap::new(false), TerminalList::new(false))?;
        tracker.locate(&mut location(cfg));

        //
        // 2. Map click (explicit coordinates, or where the user is)
        //
        let at = match (lat, lng) {
            (Some(lat), Some(lng)) => Coords::new(*lat, *lng)?,
            _ => tracker.position().ok_or(AppError::MapUnavailable)?,
        };
        tracker.on_map_clicked(at)?;

        //
        // 3. Form submission
        //
        let form = WorkoutForm::from_fields(
            *kind,
            distance,
            duration,
            cadence.as_deref().unwrap_or_default(),
            elevation.as_deref().unwrap_or_default(),
        );

        match tracker.on_form_submitted(&form)? {
            Submission::Created(id) => {
                let Some(w) = tracker.find(&id) else {
                    return Err(AppError::Other(format!("workout {id} missing after insert")));
                };
                success(format!("{} {} recorded (id {})", w.icon(), w.describe(), id));
                ttlog_soft(
                    tracker.store().conn(),
                    "add",
                    &id,
                    &format!("{} at ({})", w.describe(), w.coords()),
                );
                Ok(())
            }
            Submission::Rejected => Err(AppError::Rejected),
        }
    } else {
        Ok(())
    }
}
