/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Stale forecasts are printed in yellow.
pub fn color_for_staleness(is_stale: bool) -> &'static str {
    if is_stale { YELLOW } else { GREEN }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
