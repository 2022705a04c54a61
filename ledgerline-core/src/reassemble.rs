//! Multi-line description reassembly around anchor rows

use crate::page::{RawRow, PARTICULARS_COLUMN};

/// Combined `Particulars` text for the anchor at `idx`.
///
/// Joins the previous row, the anchor itself and the next row, skipping
/// missing cells and neighbors past either end of the page. Neighbors are
/// taken whether or not they are anchors themselves, so a decoration row
/// between two anchors lands in both descriptions.
pub fn combined_description(rows: &[RawRow], idx: usize) -> String {
    let prev = idx.checked_sub(1);
    let next = Some(idx + 1).filter(|&n| n < rows.len());

    let mut combined = String::new();
    for pos in [prev, Some(idx), next].into_iter().flatten() {
        if let Some(text) = rows.get(pos).and_then(|row| row.get(PARTICULARS_COLUMN).text()) {
            combined.push_str(text);
            combined.push(' ');
        }
    }

    combined.trim().to_string()
}
