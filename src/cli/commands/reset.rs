use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::{TerminalList, TerminalMap};

/// Delete every stored workout. There is no confirmation step.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg, TerminalMap::new(false), TerminalList::new(false))?;
    let removed = tracker.workouts().len();

    tracker.reset_all()?;

    ttlog_soft(
        tracker.store().conn(),
        "reset",
        "",
        &format!("{removed} workout(s) deleted"),
    );
    success(format!("All workouts deleted ({removed})."));
    Ok(())
}
