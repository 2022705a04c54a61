//! Seam to the PDF-to-table extraction primitive

use std::path::Path;

use crate::page::Page;
use crate::region::PageRegion;

/// Reads raw tables out of a statement PDF, one page at a time.
///
/// Calls are synchronous and may be slow; implementations must read the file
/// eagerly since it can be removed as soon as processing returns.
pub trait PageExtractor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of pages in the document at `path`.
    fn page_count(&self, path: &Path) -> Result<usize, Self::Error>;

    /// The first table found inside `region` on the 1-based `page_index`.
    fn extract_page(
        &self,
        path: &Path,
        page_index: usize,
        region: &PageRegion,
    ) -> Result<Page, Self::Error>;
}

