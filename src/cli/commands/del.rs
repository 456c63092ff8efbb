use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let target = store.get(*id).ok_or(AppError::RecordNotFound(*id))?;
        let prompt = format!(
            "Delete record {} ({} on {} at {})? This action is irreversible.",
            id,
            target.code,
            target.date_str(),
            target.time_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = store.remove(*id)?;
        success(format!("Record deleted. (id {}, {})", removed.id, removed.code));
    }

    Ok(())
}
