//! Pipe-table recognition.

use regex::Regex;

use crate::model::Table;

/// Detects markdown pipe tables in a run of body lines.
///
/// A table starts at a header line followed by a separator row. Body rows
/// are the immediately following non-blank lines containing a pipe; a body
/// line that is itself a valid separator is a row-continuation marker and is
/// skipped, not emitted as data.
pub struct TableDetector {
    separator_cell: Regex,
}

impl TableDetector {
    /// Create a detector with its separator pattern compiled once.
    pub fn new() -> Self {
        Self {
            // optional colon, 3+ dashes, optional colon; alignment ignored
            separator_cell: Regex::new(r"^:?-{3,}:?$").unwrap(),
        }
    }

    /// Split a row line into trimmed cells.
    ///
    /// One optional leading and one optional trailing pipe are stripped
    /// before splitting on the remaining pipes.
    pub fn split_cells(line: &str) -> Vec<String> {
        let mut cleaned = line.trim();
        cleaned = cleaned.strip_prefix('|').unwrap_or(cleaned);
        cleaned = cleaned.strip_suffix('|').unwrap_or(cleaned);
        cleaned
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// Check whether a line is a header/body separator row.
    pub fn is_separator(&self, line: &str) -> bool {
        if !line.contains('|') {
            return false;
        }
        let cells = Self::split_cells(line);
        if cells.is_empty() {
            return false;
        }
        cells.iter().all(|cell| self.separator_cell.is_match(cell))
    }

    /// Try to consume a table starting at `start`.
    ///
    /// Returns the table and the index of the first unconsumed line, or
    /// `None` when `start` does not sit on a header + separator pair.
    pub fn detect(&self, lines: &[&str], start: usize) -> Option<(Table, usize)> {
        let header_line = lines[start].trim();
        if !header_line.contains('|') {
            return None;
        }
        if start + 1 >= lines.len() || !self.is_separator(lines[start + 1].trim()) {
            return None;
        }

        let mut table = Table::new(Self::split_cells(header_line));
        let mut i = start + 2;
        while i < lines.len() {
            let current = lines[i].trim();
            if current.is_empty() || !current.contains('|') {
                break;
            }
            if self.is_separator(current) {
                i += 1;
                continue;
            }
            table.add_row(Self::split_cells(current));
            i += 1;
        }

        log::debug!(
            "table with {} columns and {} rows at line {}",
            table.column_count(),
            table.row_count(),
            start
        );
        Some((table, i))
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}
