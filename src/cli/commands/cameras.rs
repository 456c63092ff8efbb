use crate::capture::{CaptureAdapter, LineScanner, choose_default_device};
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::Table;
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let scanner = LineScanner::new(io::stdin().lock());
    let devices = scanner.list_devices()?;
    let default_id = choose_default_device(&devices, &cfg.preferred_camera).map(|d| d.id.clone());

    let mut table = Table::new(&["", "ID", "Device"]);
    for d in &devices {
        let mark = if Some(&d.id) == default_id.as_ref() { "*" } else { "" };
        table.add_row(vec![mark.to_string(), d.id.clone(), d.display_label()]);
    }
    println!("{}", table.render());

    Ok(())
}
