//! End-to-end processing of one statement document

use std::path::Path;

use tracing::{debug, info, info_span};

use crate::classify::anchor_positions;
use crate::error::{Result, StatementError};
use crate::extractor::PageExtractor;
use crate::finalize::{aggregate, finalize};
use crate::page::{Page, DATE_COLUMN, PARTICULARS_COLUMN};
use crate::reassemble::combined_description;
use crate::record::TransactionRecord;
use crate::region::region_for;

const REQUIRED_COLUMNS: &[&str] = &[DATE_COLUMN, PARTICULARS_COLUMN];

/// Turn the statement PDF at `path` into its ordered transaction records.
///
/// Pages are extracted strictly in order. The first failing page aborts the
/// whole document and no records from earlier pages are returned.
pub fn process_document<E>(extractor: &E, path: &Path) -> Result<Vec<TransactionRecord>>
where
    E: PageExtractor + ?Sized,
{
    let span = info_span!("process_document", path = %path.display());
    let _enter = span.enter();

    let total_pages = extractor
        .page_count(path)
        .map_err(|e| StatementError::extraction(0, e))?;
    if total_pages == 0 {
        return Err(StatementError::extraction(0, "document has no pages"));
    }

    let mut pages = Vec::with_capacity(total_pages);
    for page_index in 1..=total_pages {
        let region = region_for(page_index, total_pages);
        let page = extractor
            .extract_page(path, page_index, &region)
            .map_err(|e| StatementError::extraction(page_index, e))?;
        pages.push(normalize_page(&page)?);
    }

    let records = finalize(aggregate(pages));
    info!(pages = total_pages, records = records.len(), "statement processed");
    Ok(records)
}

/// Records for one extracted page, one per anchor row in row order.
pub fn normalize_page(page: &Page) -> Result<Vec<TransactionRecord>> {
    if page.columns.is_empty() {
        return Err(StatementError::extraction(page.index, "no table found"));
    }
    for column in REQUIRED_COLUMNS {
        if !page.has_column(column) {
            return Err(StatementError::MissingColumn {
                page_index: page.index,
                column: column.to_string(),
            });
        }
    }

    let anchors = anchor_positions(&page.rows);
    debug!(
        page = page.index,
        rows = page.rows.len(),
        anchors = anchors.len(),
        "page normalized"
    );

    Ok(anchors
        .into_iter()
        .map(|idx| {
            let description = combined_description(&page.rows, idx);
            TransactionRecord::from_anchor(&page.rows[idx], description)
        })
        .collect())
}
