//! Transaction records built from anchor rows

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::cell::Cell;
use crate::page::{RawRow, DATE_COLUMN, PARTICULARS_COLUMN};

/// Name of the user-editable label field
pub const LABEL_FIELD: &str = "label";

/// One statement transaction, derived from exactly one anchor row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: String,
    /// Combined multi-line description (serialized under `Particulars`)
    pub description: String,
    /// Remaining anchor-row columns (amounts, instrument numbers, ...), in page order
    pub fields: Vec<(String, Cell)>,
    /// `None` until the record is finalized
    pub label: Option<String>,
}

impl TransactionRecord {
    /// Build a record from an anchor row and its already combined description.
    pub fn from_anchor(anchor: &RawRow, description: String) -> Self {
        let fields = anchor
            .cells()
            .filter(|(name, _)| *name != DATE_COLUMN && *name != PARTICULARS_COLUMN)
            .map(|(name, cell)| (name.to_string(), cell.clone()))
            .collect();

        Self {
            date: anchor.get(DATE_COLUMN).text().unwrap_or_default().to_string(),
            description,
            fields,
            label: None,
        }
    }

    /// Passthrough column by name; unknown columns read as absent.
    pub fn field(&self, column: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    /// Flat view in output order: `Date`, `Particulars`, passthrough columns, `label`.
    ///
    /// `None` marks an absent value.
    pub fn columns(&self) -> Vec<(&str, Option<&str>)> {
        let mut out = Vec::with_capacity(self.fields.len() + 3);
        out.push((DATE_COLUMN, Some(self.date.as_str())));
        out.push((PARTICULARS_COLUMN, Some(self.description.as_str())));
        out.extend(self.fields.iter().map(|(name, cell)| (name.as_str(), cell.text())));
        out.push((LABEL_FIELD, Some(self.label.as_deref().unwrap_or_default())));
        out
    }
}

impl Serialize for TransactionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (name, value) in columns {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
