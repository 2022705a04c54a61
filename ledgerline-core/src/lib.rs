//! ledgerline-core: statement normalization engine
//!
//! Turns raw per-page table extractions of a bank statement into one ordered
//! list of transaction records with multi-line descriptions reassembled.

pub mod cell;
pub mod classify;
pub mod error;
pub mod extractor;
pub mod finalize;
pub mod page;
pub mod process;
pub mod reassemble;
pub mod record;
pub mod region;

pub use cell::Cell;
pub use classify::anchor_positions;
pub use error::{BoxError, StatementError};
pub use extractor::PageExtractor;
pub use finalize::{aggregate, finalize};
pub use page::{Page, RawRow, DATE_COLUMN, PARTICULARS_COLUMN};
pub use process::{normalize_page, process_document};
pub use reassemble::combined_description;
pub use record::{TransactionRecord, LABEL_FIELD};
pub use region::{region_for, CropRect, PageRegion, StructuralMode};
