//! ledgerline-ingest: PDF table extraction backed by the tabula-java CLI.

pub mod error;
pub mod pdf;
pub mod table;
pub mod tabula;

pub use error::IngestError;
pub use table::parse_tabula_json;
pub use tabula::TabulaExtractor;
