use lopdf::Document;
use std::path::Path;

use crate::error::IngestError;

pub fn count_pages(path: &Path) -> Result<usize, IngestError> {
    let document = Document::load(path)?;
    Ok(document.get_pages().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_pdf_error() {
        let err = count_pages(Path::new("/nonexistent/statement.pdf")).unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }
}
