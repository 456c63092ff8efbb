use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg)?;

        if store.is_empty() {
            info("The register is already empty.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} attendance records? This action is irreversible.",
            store.len()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let count = store.len();
        store.clear();
        success(format!("All data has been cleared. {} record(s) removed.", count));
    }

    Ok(())
}
