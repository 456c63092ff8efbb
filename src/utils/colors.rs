/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// "Yes" in green, "No" greyed out.
pub fn colorize_flag(value: bool) -> String {
    if value {
        format!("{GREEN}Yes{RESET}")
    } else {
        format!("{GREY}No{RESET}")
    }
}
