//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns so Hebrew labels and emoji line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
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

    /// Columns sized to their headers; rows widen them as they are added
    pub fn from_headers(headers: &[&str]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: h.width(),
                })
                .collect(),
        )
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
