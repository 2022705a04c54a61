//! Decode tabula-java JSON output into a raw page table
//!
//! tabula prints a JSON array of tables; each table's `data` is a list of
//! rows and each row a list of cells with a `text` field:
//!
//!   [{"extraction_method":"lattice","data":[[{"text":"Date"},{"text":"Particulars"}], ...]}]
//!
//! Only the first table is used. Its first row is the header.

use ledgerline_core::{Cell, Page, RawRow};
use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;

#[derive(Debug, Deserialize)]
struct TabulaTable {
    #[serde(default)]
    extraction_method: String,
    #[serde(default)]
    data: Vec<Vec<TabulaCell>>,
}

#[derive(Debug, Deserialize)]
struct TabulaCell {
    #[serde(default)]
    text: String,
}

/// Parse tabula JSON for the 1-based `page_index` into a [`Page`].
pub fn parse_tabula_json(page_index: usize, json: &str) -> Result<Page, IngestError> {
    let tables: Vec<TabulaTable> = serde_json::from_str(json)?;
    let table = tables
        .into_iter()
        .find(|t| !t.data.is_empty())
        .ok_or(IngestError::NoTable { page: page_index })?;

    let mut data = table.data.into_iter();
    let header = data.next().unwrap_or_default();
    let columns = column_names(header.iter().map(|c| c.text.as_str()));

    let rows: Vec<RawRow> = data
        .map(|cells| {
            if cells.len() > columns.len() {
                debug!(page = page_index, cells = cells.len(), "dropping cells beyond header");
            }
            let mut row = RawRow::new();
            for (i, name) in columns.iter().enumerate() {
                row.insert(name.clone(), Cell::from_raw(cells.get(i).map(|c| c.text.as_str())));
            }
            row
        })
        .collect();

    debug!(
        page = page_index,
        method = %table.extraction_method,
        columns = columns.len(),
        rows = rows.len(),
        "tabula table decoded"
    );

    Ok(Page::new(page_index, columns, rows))
}

/// Trimmed header names; blanks become `Unnamed: i`, repeats get a `.n` suffix.
fn column_names<'a>(header: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (i, raw) in header.enumerate() {
        let base = match raw.trim() {
            "" => format!("Unnamed: {i}"),
            s => s.to_string(),
        };
        let mut name = base.clone();
        let mut n = 1;
        while names.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        names.push(name);
    }
    names
}
