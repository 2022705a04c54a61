//! Failures that abort processing of a statement

/// Boxed cause reported by an extractor
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, StatementError>;

#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    /// The extractor produced no table for a page (page 0 = the document itself)
    #[error("extraction failed on page {page_index}: {cause}")]
    Extraction {
        page_index: usize,
        #[source]
        cause: BoxError,
    },

    /// An extracted page's schema lacks a required column entirely
    #[error("page {page_index} has no '{column}' column")]
    MissingColumn { page_index: usize, column: String },
}

impl StatementError {
    pub fn extraction(page_index: usize, cause: impl Into<BoxError>) -> Self {
        StatementError::Extraction {
            page_index,
            cause: cause.into(),
        }
    }

    pub fn page_index(&self) -> usize {
        match self {
            StatementError::Extraction { page_index, .. }
            | StatementError::MissingColumn { page_index, .. } => *page_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_page() {
        let err = StatementError::extraction(2, "no tables found");
        assert_eq!(err.to_string(), "extraction failed on page 2: no tables found");
        assert_eq!(err.page_index(), 2);

        let err = StatementError::MissingColumn {
            page_index: 3,
            column: "Date".to_string(),
        };
        assert_eq!(err.to_string(), "page 3 has no 'Date' column");
    }
}
