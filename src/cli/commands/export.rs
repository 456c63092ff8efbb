use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let path = ExportLogic::export(store.records(), *format, file.as_deref(), *force, date::today())?;

        let msg = format!("{} records exported as {}", store.len(), format.as_str());
        store.audit("export", &path.to_string_lossy(), &msg);
    }
    Ok(())
}
