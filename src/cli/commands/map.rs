use crate::cli::commands::{location, open_tracker};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::{TerminalList, TerminalMap};

/// Resolve the location and draw the map with every marker.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg, TerminalMap::new(true), TerminalList::new(false))?;

    if tracker.locate(&mut location(cfg)) {
        info(format!("{} marker(s) on the map", tracker.map().markers().len()));
    }
    Ok(())
}
