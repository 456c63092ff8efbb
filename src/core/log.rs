use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "restore" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        println!("📜 Internal log:\n");
        for line in Self::format_lines(&entries) {
            println!("{line}");
        }

        Ok(())
    }

    /// One aligned line per entry: `id: date | op (target) => message`.
    pub fn format_lines(entries: &[LogEntry]) -> Vec<String> {
        let rows: Vec<(i64, String, &str, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (e.id, date, e.operation.as_str(), op_target, e.message.as_str())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

        rows.into_iter()
            .map(|(id, date, op, op_target, message)| {
                let color = color_for_operation(op);

                // --- TRUNCATE a 60 caratteri ---
                let visible = if op_target.chars().count() > OP_MAX_WIDTH {
                    let mut s: String = op_target.chars().take(OP_MAX_WIDTH - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                // only the operation word is coloured
                let colored = match visible.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    id,
                    date,
                    colored,
                    padding,
                    message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}
