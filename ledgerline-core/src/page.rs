//! Raw rows and pages handed over by the page extractor

use crate::cell::Cell;

/// Transaction date column
pub const DATE_COLUMN: &str = "Date";
/// Transaction description column
pub const PARTICULARS_COLUMN: &str = "Particulars";

static ABSENT: Cell = Cell::Absent;

/// One extracted table row: an ordered mapping from column name to cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: Vec<(String, Cell)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated column name replaces the earlier cell.
    pub fn with(mut self, column: impl Into<String>, cell: Cell) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: Cell) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = cell,
            None => self.cells.push((column, cell)),
        }
    }

    /// Cell for `column`; a column the row never saw reads as absent.
    pub fn get(&self, column: &str) -> &Cell {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
            .unwrap_or(&ABSENT)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(name, cell)| (name.as_str(), cell))
    }
}

/// One page's table: its 1-based page index, column schema and rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub index: usize,
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl Page {
    pub fn new(index: usize, columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            index,
            columns,
            rows,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_reads_absent() {
        let row = RawRow::new().with(PARTICULARS_COLUMN, Cell::value("Salary"));
        assert_eq!(row.get(DATE_COLUMN), &Cell::Absent);
        assert_eq!(row.get(PARTICULARS_COLUMN).text(), Some("Salary"));
    }

    #[test]
    fn test_insert_keeps_column_order() {
        let mut row = RawRow::new()
            .with(DATE_COLUMN, Cell::value("2024-01-05"))
            .with(PARTICULARS_COLUMN, Cell::value("Salary"))
            .with("Cr Amount", Cell::value("100.00"));
        row.insert(PARTICULARS_COLUMN, Cell::value("Bonus"));

        let names: Vec<&str> = row.cells().map(|(name, _)| name).collect();
        assert_eq!(names, vec![DATE_COLUMN, PARTICULARS_COLUMN, "Cr Amount"]);
        assert_eq!(row.get(PARTICULARS_COLUMN).text(), Some("Bonus"));
    }
}
