pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod map;
pub mod reset;
pub mod select;
pub mod session;

use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::{FixedLocation, TerminalList, TerminalMap};

pub type TerminalTracker = Tracker<SqliteStore, TerminalMap, TerminalList>;

/// Build the tracker on the configured database and load the stored list.
pub(crate) fn open_tracker(
    cfg: &Config,
    map: TerminalMap,
    list: TerminalList,
) -> AppResult<TerminalTracker> {
    let store = SqliteStore::open(&cfg.database)?;
    let mut tracker = Tracker::new(store, map, list, cfg.storage_key.clone(), cfg.map_zoom_level);
    tracker.load_persisted()?;
    Ok(tracker)
}

pub(crate) fn location(cfg: &Config) -> FixedLocation {
    FixedLocation(cfg.home_position)
}
