//! Table formatting utilities

use anyhow::Result;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, CellAlignment, ContentArrangement, Table,
};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a simple table with headers and rows
    pub fn simple(headers: Vec<&str>, rows: Vec<Vec<String>>) -> Result<String> {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        Ok(table.to_string())
    }

    /// Create a statistics table: first column left-aligned labels, every
    /// other column right-aligned numbers
    pub fn stats(headers: Vec<&str>, rows: Vec<Vec<String>>) -> Result<String> {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        for (index, column) in table.column_iter_mut().enumerate() {
            if index > 0 {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        Ok(table.to_string())
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> Result<String> {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![key, &value]);
        }

        Ok(table.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_table() {
        let headers = vec!["科目", "得点"];
        let rows = vec![
            vec!["解剖学".to_string(), "38".to_string()],
            vec!["生理学".to_string(), "42".to_string()],
        ];
        let result = TableFormatter::simple(headers, rows);
        assert!(result.is_ok());
        assert!(result.unwrap().contains("解剖学"));
    }

    #[test]
    fn test_stats_table() {
        let headers = vec!["科目", "得点率", "順位"];
        let rows = vec![vec!["必修".to_string(), "90.0".to_string(), "3".to_string()]];
        let result = TableFormatter::stats(headers, rows);
        assert!(result.is_ok());
    }

    #[test]
    fn test_key_value_table() {
        let items = vec![
            ("学籍番号", "S001".to_string()),
            ("総合点", "443 / 550".to_string()),
        ];
        let result = TableFormatter::key_value(items);
        assert!(result.is_ok());
    }
}
