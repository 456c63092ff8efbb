use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::stats;
use crate::errors::AppResult;
use crate::ui::render::dashboard;
use crate::utils::date;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let today = date::today();
    print!("{}", dashboard(&stats(store.records(), today), today));
    Ok(())
}
