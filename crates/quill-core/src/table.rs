//! Table formatting for CLI output.
//!
//! Aligned columns on a terminal, tab-separated values when piped.

use comfy_table::{Cell, ContentArrangement, Table as ComfyTable, presets};

use crate::iostreams::IOStreams;

/// Table printer that adapts output based on TTY/non-TTY mode.
#[derive(Debug)]
pub struct TablePrinter {
    is_tty: bool,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create a new table printer.
    pub fn new(ios: &IOStreams) -> Self {
        Self {
            is_tty: ios.is_stdout_tty(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set table headers. They are only shown on a terminal.
    #[must_use]
    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|h| h.to_uppercase()).collect();
        self
    }

    /// Add a row of values.
    pub fn add_row(&mut self, fields: Vec<String>) {
        self.rows.push(fields);
    }

    /// Render the table to a string.
    pub fn render(&self) -> String {
        if !self.is_tty {
            return self
                .rows
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut table = ComfyTable::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !self.headers.is_empty() {
            table.set_header(self.headers.iter().map(Cell::new));
        }
        for row in &self.rows {
            table.add_row(row.iter().map(Cell::new));
        }
        table.to_string()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
