//! Output of processed statements as a JSON report or CSV

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;
use ledgerline_core::{TransactionRecord, LABEL_FIELD};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Envelope around a successfully processed statement
#[derive(Debug, Serialize)]
pub struct StatementReport<'a> {
    pub success: bool,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<&'a str>,
    pub generated_at_utc: String,
    pub transactions: &'a [TransactionRecord],
}

impl<'a> StatementReport<'a> {
    pub fn new(source: String, bank: Option<&'a str>, transactions: &'a [TransactionRecord]) -> Self {
        Self {
            success: true,
            source,
            bank,
            generated_at_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            transactions,
        }
    }
}

pub fn write_json(out: impl Write, report: &StatementReport<'_>, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(out, report).context("write JSON report")
    } else {
        serde_json::to_writer(out, report).context("write JSON report")
    }
}

/// Write records as CSV: every column seen across records in first-seen
/// order, `label` last. Absent values become empty fields.
pub fn write_csv(out: impl Write, records: &[TransactionRecord]) -> Result<()> {
    let mut header: Vec<&str> = Vec::new();
    for record in records {
        for (name, _) in record.columns() {
            if name != LABEL_FIELD && !header.contains(&name) {
                header.push(name);
            }
        }
    }
    header.push(LABEL_FIELD);

    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(&header).context("write CSV header")?;
    for record in records {
        let columns = record.columns();
        let row = header.iter().map(|name| {
            columns
                .iter()
                .find(|(col, _)| col == name)
                .and_then(|(_, value)| *value)
                .unwrap_or("")
        });
        wtr.write_record(row).context("write CSV row")?;
    }
    wtr.flush().context("flush CSV")?;
    Ok(())
}
