//! Table rendering utilities for CLI outputs.
//! Column widths are computed from content, ANSI-aware so colored cells line
//! up with plain ones.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn visible_width(cell: &str) -> usize {
        UnicodeWidthStr::width(strip_ansi(cell).as_str())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(Self::visible_width(cell));
                }
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let padding = width.saturating_sub(Self::visible_width(cell));
        format!("{}{}", cell, " ".repeat(padding))
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&Self::pad(header, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for width in &widths {
            out.push_str(&"-".repeat(*width));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            // Cells beyond the header set are dropped rather than panicking
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(&Self::pad(cell, *width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
