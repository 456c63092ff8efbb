use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RecordQuery, filter_sorted};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::records_table;
use crate::utils::range::resolve_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        period,
        from,
        to,
    } = cmd
    {
        let range = resolve_range(period.as_deref(), from.as_deref(), to.as_deref())?;
        let query = RecordQuery::new(search.clone().unwrap_or_default(), range);

        let store = open_store(cfg)?;
        let view = filter_sorted(store.records(), &query);

        if view.is_empty() {
            info("No attendance records found");
            return Ok(());
        }

        println!("{}", records_table(&view));
        println!("{} of {} record(s)", view.len(), store.len());
    }

    Ok(())
}
