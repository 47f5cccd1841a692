use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::{TerminalList, TerminalMap};

/// Render every stored workout, newest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg, TerminalMap::new(false), TerminalList::new(false))?;

    let count = tracker.workouts().len();
    if count == 0 {
        info("No workouts recorded yet.");
        return Ok(());
    }

    header("Workouts");
    tracker.view().print_all();
    println!("Total: {count} workout(s)");
    Ok(())
}
