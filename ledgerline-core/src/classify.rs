//! Anchor-row detection

use crate::page::{RawRow, DATE_COLUMN};

/// Positions of rows whose `Date` cell is present, in row order.
///
/// Rows without a date are decoration rows and never anchor a record.
pub fn anchor_positions(rows: &[RawRow]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.get(DATE_COLUMN).is_present())
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::page::PARTICULARS_COLUMN;

    fn row(date: Option<&str>, particulars: &str) -> RawRow {
        RawRow::new()
            .with(DATE_COLUMN, Cell::from_raw(date))
            .with(PARTICULARS_COLUMN, Cell::value(particulars))
    }

    #[test]
    fn test_anchor_positions_in_order() {
        let rows = vec![
            row(None, "Brought fwd"),
            row(Some("2024-01-05"), "Salary"),
            row(None, "credit"),
            row(Some("2024-01-06"), "Rent"),
        ];
        assert_eq!(anchor_positions(&rows), vec![1, 3]);
    }

    #[test]
    fn test_no_dates_is_empty() {
        let rows = vec![row(None, "Disclaimer"), row(None, "Page 3 of 3")];
        assert!(anchor_positions(&rows).is_empty());
        assert!(anchor_positions(&[]).is_empty());
    }

    #[test]
    fn test_placeholder_date_is_not_anchor() {
        let rows = vec![row(Some("NaN"), "Opening balance"), row(Some("   "), "blank date")];
        // Blank-but-present counts; NaN placeholder does not.
        assert_eq!(anchor_positions(&rows), vec![1]);
    }
}
