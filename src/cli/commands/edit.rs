use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::render::records_table;

/// Change the item flags of a record. Flags not given keep their value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, egg, banana } = cmd {
        let mut store = open_store(cfg)?;

        let current = store.get(*id).ok_or(AppError::RecordNotFound(*id))?;
        let egg = egg.unwrap_or(current.egg);
        let banana = banana.unwrap_or(current.banana);

        if egg == current.egg && banana == current.banana {
            info(format!("Record {} unchanged.", id));
            return Ok(());
        }

        let updated = store.update_flags(*id, egg, banana)?;
        success(format!("Record updated successfully! (id {})", id));
        println!("{}", records_table(&[updated]));
    }

    Ok(())
}
