//! User-edited transaction labels.
//!
//! Labels are not persisted yet; the store accepts updates and logs them.

use anyhow::{bail, Result};
use tracing::info;

pub trait LabelStore {
    fn update_label(&self, transaction_id: &str, label: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct NoopLabelStore;

impl LabelStore for NoopLabelStore {
    fn update_label(&self, transaction_id: &str, label: &str) -> Result<()> {
        if transaction_id.trim().is_empty() {
            bail!("transaction id is required");
        }
        info!(transaction_id, label, "label update accepted (not persisted)");
        Ok(())
    }
}
