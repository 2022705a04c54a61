//! Scoped staging of submitted statements.
//!
//! A submitted PDF is copied into a private temp file for the duration of
//! processing. The staged copy is removed when its guard is released or
//! dropped, on success and failure alike. The submitted file itself is never
//! touched.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub struct Staging {
    dir: PathBuf,
}

/// A staged statement; deleted on drop.
pub struct StagedStatement {
    file: NamedTempFile,
}

impl Staging {
    /// Stage into `dir`, or the system temp dir when `None`.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(std::env::temp_dir);
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Copy `source` into the staging area. Only `.pdf` files are accepted.
    pub fn stage(&self, source: &Path) -> Result<StagedStatement> {
        if !is_pdf(source) {
            bail!("Invalid file format: {} (expected a .pdf)", source.display());
        }

        let mut input =
            File::open(source).with_context(|| format!("open {}", source.display()))?;
        let mut file = tempfile::Builder::new()
            .prefix("ledgerline-")
            .suffix(".pdf")
            .tempfile_in(&self.dir)
            .with_context(|| format!("create staging file in {}", self.dir.display()))?;
        io::copy(&mut input, file.as_file_mut())
            .with_context(|| format!("copy {}", source.display()))?;

        debug!(source = %source.display(), staged = %file.path().display(), "statement staged");
        Ok(StagedStatement { file })
    }
}

impl StagedStatement {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the staged copy now, reporting a failed removal.
    pub fn release(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .with_context(|| format!("remove {}", path.display()))?;
        debug!(staged = %path.display(), "staged statement released");
        Ok(())
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_source(dir: &Path, name: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, b"%PDF-1.4\n%%EOF\n").unwrap();
        p
    }

    #[test]
    fn test_release_removes_staged_copy_only() {
        let src_dir = tempfile::tempdir().unwrap();
        let stage_dir = tempfile::tempdir().unwrap();
        let source = write_source(src_dir.path(), "statement.pdf");

        let staging = Staging::new(Some(stage_dir.path().to_path_buf())).unwrap();
        let staged = staging.stage(&source).unwrap();
        let staged_path = staged.path().to_path_buf();
        assert!(staged_path.starts_with(stage_dir.path()));
        assert_eq!(fs::read(&staged_path).unwrap(), fs::read(&source).unwrap());

        staged.release().unwrap();
        assert!(!staged_path.exists());
        assert!(source.exists());
    }

    #[test]
    fn test_drop_removes_staged_copy() {
        let src_dir = tempfile::tempdir().unwrap();
        let stage_dir = tempfile::tempdir().unwrap();
        let source = write_source(src_dir.path(), "STATEMENT.PDF");

        let staging = Staging::new(Some(stage_dir.path().to_path_buf())).unwrap();
        let staged_path = {
            let staged = staging.stage(&source).unwrap();
            staged.path().to_path_buf()
        };
        assert!(!staged_path.exists());
    }

    #[test]
    fn test_rejects_non_pdf() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = write_source(src_dir.path(), "statement.csv");
        let staging = Staging::new(Some(src_dir.path().to_path_buf())).unwrap();
        let err = staging.stage(&source).err().unwrap();
        assert!(err.to_string().contains("Invalid file format"));
    }

    #[test]
    fn test_missing_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(staging.stage(&dir.path().join("missing.pdf")).is_err());
    }
}
