//! User-facing status lines. Diagnostics for developers go through
//! `tracing` instead.

use std::fmt;

use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

const BOLD: &str = "\x1b[1m";
const FG_BLUE: &str = "\x1b[34m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Dimmed secondary line (legends, diagnostics summaries)
pub fn note<T: fmt::Display>(msg: T) {
    println!("{}{}{}", GREY, msg, RESET);
}

/// Section header, e.g. "=== L1 · 2024-03 ==="
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}
