use crate::cli::commands::{location, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::{TerminalList, TerminalMap};

/// Select a workout and keep its interaction count.
///
/// Each invocation is a fresh process, so the updated count is persisted
/// here; otherwise it would be lost on exit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { id } = cmd {
        let mut tracker = open_tracker(cfg, TerminalMap::new(false), TerminalList::new(false))?;
        tracker.locate(&mut location(cfg));

        if !tracker.on_workout_selected(id) {
            info(format!("No workout with id {id}."));
            return Ok(());
        }
        tracker.persist()?;

        if let Some(w) = tracker.find(id) {
            success(format!(
                "{} {} selected ({} time(s))",
                w.icon(),
                w.describe(),
                w.clicks()
            ));
            ttlog_soft(tracker.store().conn(), "select", id, w.describe());
        }
    }
    Ok(())
}
