use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let path = expand_tilde(file);
        // validate before asking anything
        let records = BackupLogic::read_backup(&path)?;

        let mut store = open_store(cfg)?;
        let prompt = format!(
            "Replace the {} current record(s) with the {} from {}?",
            store.len(),
            records.len(),
            path.display()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let count = records.len();
        store.replace_all(records);
        success(format!("{} record(s) restored from {}", count, path.display()));
    }

    Ok(())
}
