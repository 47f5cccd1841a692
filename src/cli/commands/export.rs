use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let count = ExportLogic::export(&mut store, &cfg.storage_key, *format, file, *force)?;
        ttlog_soft(
            store.conn(),
            "export",
            format.as_str(),
            &format!("{count} workout(s) exported to {file}"),
        );
    }
    Ok(())
}
