use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let mut store = open_store(cfg)?;
        let written = BackupLogic::backup(&mut store, &expand_tilde(file), *compress)?;
        success(format!(
            "Backup of {} record(s) written to {}",
            store.len(),
            written.display()
        ));
    }

    Ok(())
}
