use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::TableData;

use super::Placeholder;

/// Pipe-table line roles, classified one line at a time.
///
/// A table is a header row, a separator row and at least one body row, all
/// on consecutive lines.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';

    /// A row is any non-blank line containing a pipe.
    pub fn is_row(line: &str) -> bool {
        !line.trim().is_empty() && line.contains(Self::PIPE)
    }

    /// Separator rows use only `|`, `-`, `:` and whitespace, with at least
    /// one pipe and one dash.
    pub fn is_separator(line: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR.get_or_init(|| {
            Regex::new(r"^[ \t]*[-:| \t]*-[-:| \t]*$").expect("Invalid table separator regex")
        });
        line.contains(Self::PIPE) && re.is_match(line)
    }

    /// Splits a row into trimmed cells, dropping the empty cells produced by
    /// a leading or trailing bracketing pipe.
    pub fn cells(line: &str) -> Vec<String> {
        let mut cells: Vec<String> = line
            .split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect();
        let trimmed = line.trim();
        if trimmed.ends_with(Self::PIPE) && cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        if trimmed.starts_with(Self::PIPE) && cells.first().is_some_and(String::is_empty) {
            cells.remove(0);
        }
        cells
    }

    /// Returns how many lines starting at `start` form a table, if any.
    fn span_at(lines: &[&str], start: usize) -> Option<usize> {
        let header = lines.get(start)?;
        let separator = lines.get(start + 1)?;
        if !Self::is_row(header) || Self::is_separator(header) || !Self::is_separator(separator) {
            return None;
        }
        let body = lines[start + 2..]
            .iter()
            .take_while(|line| Self::is_row(line))
            .count();
        (body > 0).then_some(body + 2)
    }

    fn parse(header: &str, body: &[&str]) -> TableData {
        let mut content: Vec<Vec<String>> = std::iter::once(header)
            .chain(body.iter().copied())
            .map(Self::cells)
            .collect();
        let width = content.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut content {
            row.resize(width, String::new());
        }
        TableData {
            with_headings: true,
            content,
        }
    }
}

/// Pulls every pipe table out of `text`.
///
/// Returns the tables in the order found and the residual text with each
/// table region collapsed to one `[TABLE_PLACEHOLDER]` line.
pub fn extract_tables(text: &str) -> (Vec<TableData>, String) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut tables = Vec::new();
    let mut residual: Vec<&str> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        match PipeTable::span_at(&lines, i) {
            Some(len) => {
                tables.push(PipeTable::parse(lines[i], &lines[i + 2..i + len]));
                residual.push(Placeholder::TABLE);
                i += len;
            }
            None => {
                residual.push(lines[i]);
                i += 1;
            }
        }
    }

    (tables, residual.join("\n"))
}
