//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns, so Cyrillic names and ANSI
//! colour codes do not break the alignment.

use unicode_width::UnicodeWidthStr;

use crate::utils::colors::strip_ansi;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            right_align: false,
        }
    }

    pub fn right(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widen columns so that every header and cell fits.
    pub fn fit(&mut self) {
        for (i, col) in self.columns.iter_mut().enumerate() {
            let widest = self
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| display_width(c))
                .chain(std::iter::once(display_width(&col.header)))
                .max()
                .unwrap_or(0);
            col.width = col.width.max(widest);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width, col.right_align));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width, col.right_align));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

fn pad(s: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(s)));
    if right {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}
