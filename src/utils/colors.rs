//! ANSI color helper utilities for terminal output.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::grid::CellOrigin;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

static ANSI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Empty day → grey, overridden cell → yellow, server cell → as is.
pub fn colorize_cell(value: &str, origin: Option<CellOrigin>) -> String {
    match origin {
        None => format!("{GREY}{value}{RESET}"),
        Some(CellOrigin::Override) => format!("{YELLOW}{value}{RESET}"),
        Some(CellOrigin::Server) => value.to_string(),
    }
}

/// Colour of a special (non-working) template label.
pub fn color_for_special(label: &str) -> &'static str {
    match label {
        "ВЫХ" => GREY,
        "ОТП" => CYAN,
        "ДР" => MAGENTA,
        _ => GREEN,
    }
}
