use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tabula exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },

    #[error("unreadable tabula output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot open PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("no table found on page {page}")]
    NoTable { page: usize },
}
