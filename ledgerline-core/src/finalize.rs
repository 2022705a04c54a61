//! Page aggregation and record finalization

use crate::cell::Cell;
use crate::record::TransactionRecord;

/// Concatenate per-page record lists in page order.
///
/// Pages that produced nothing simply contribute nothing.
pub fn aggregate<I>(pages: I) -> Vec<TransactionRecord>
where
    I: IntoIterator<Item = Vec<TransactionRecord>>,
{
    pages.into_iter().flatten().collect()
}

/// Give every record a label (empty unless already set), the same passthrough
/// columns as every other record (first-seen order, missing ones absent), and
/// turn placeholder cells into explicit absent markers. Re-running it changes
/// nothing.
pub fn finalize(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    let columns = field_columns(&records);
    records
        .into_iter()
        .map(|record| finalize_record(record, &columns))
        .collect()
}

/// Union of all records' passthrough column names, in first-seen order.
fn field_columns(records: &[TransactionRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for (name, _) in records.iter().flat_map(|r| r.fields.iter()) {
        if !columns.contains(name) {
            columns.push(name.clone());
        }
    }
    columns
}

fn finalize_record(mut record: TransactionRecord, columns: &[String]) -> TransactionRecord {
    record.label.get_or_insert_with(String::new);

    let mut fields = std::mem::take(&mut record.fields);
    record.fields = columns
        .iter()
        .map(|name| {
            let cell = fields
                .iter()
                .position(|(n, _)| n == name)
                .map(|i| fields.swap_remove(i).1)
                .unwrap_or(Cell::Absent);
            (name.clone(), cell.normalized())
        })
        .collect();

    if Cell::value(record.date.as_str()).is_placeholder() {
        record.date.clear();
    }
    record
}
