//! Terminal rendering of the register: record list and dashboard.

use crate::core::Stats;
use crate::models::AttendanceRecord;
use crate::utils::colors::{BOLD, CYAN, GREEN, MAGENTA, RESET, YELLOW, colorize_flag};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn records_table(records: &[&AttendanceRecord]) -> String {
    let mut table = Table::new(&["ID", "QR ID", "Date", "Time", "Egg", "Banana"]);
    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.code.clone(),
            r.date_str(),
            r.time_str(),
            colorize_flag(r.egg),
            colorize_flag(r.banana),
        ]);
    }
    table.render()
}

pub fn dashboard(stats: &Stats, today: NaiveDate) -> String {
    format!(
        "{BOLD}Dashboard{RESET}\n\
         🥚 {YELLOW}Total Eggs{RESET}         {}\n\
         🍌 {GREEN}Total Bananas{RESET}      {}\n\
         👥 {CYAN}Total Attendance{RESET}   {}\n\
         🗓️  {MAGENTA}Today's Attendance{RESET} {} ({})\n",
        stats.total_egg,
        stats.total_banana,
        stats.total,
        stats.today,
        crate::utils::date::month_day(today),
    )
}
