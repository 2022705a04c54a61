use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$LEDGERLINE_HOME`, or `~/.ledgerline`.
pub fn ledgerline_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("LEDGERLINE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ledgerline"))
}

pub fn ensure_ledgerline_home() -> Result<PathBuf> {
    let dir = ledgerline_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
