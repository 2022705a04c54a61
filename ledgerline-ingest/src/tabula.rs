//! Page extractor that shells out to tabula-java.
//!
//! One synchronous `java -jar tabula.jar` run per page, e.g.
//!   java -jar tabula.jar --pages 2 --area %5,0,100,100 --stream --format JSON statement.pdf

use ledgerline_core::{CropRect, Page, PageExtractor, PageRegion, StructuralMode};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::IngestError;
use crate::pdf::count_pages;
use crate::table::parse_tabula_json;

#[derive(Debug, Clone)]
pub struct TabulaExtractor {
    /// Java launcher (default: "java")
    pub java: String,
    /// Path to the tabula-java jar-with-dependencies
    pub jar: PathBuf,
    /// Extra JVM flags placed before `-jar`
    pub jvm_args: Vec<String>,
}

impl TabulaExtractor {
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            java: "java".to_string(),
            jar: jar.into(),
            jvm_args: Vec::new(),
        }
    }

    pub fn with_java(mut self, java: impl Into<String>) -> Self {
        self.java = java.into();
        self
    }

    pub fn with_jvm_args(mut self, args: Vec<String>) -> Self {
        self.jvm_args = args;
        self
    }

    /// Full argument list passed to the java launcher.
    pub fn command_args(&self, path: &Path, page_index: usize, region: &PageRegion) -> Vec<String> {
        let mut args = self.jvm_args.clone();
        args.push("-jar".to_string());
        args.push(self.jar.display().to_string());
        args.push("--pages".to_string());
        args.push(page_index.to_string());
        args.push("--area".to_string());
        args.push(area_arg(&region.crop));
        args.push(
            match region.mode {
                StructuralMode::GridLines => "--lattice",
                StructuralMode::TextClusters => "--stream",
            }
            .to_string(),
        );
        args.push("--format".to_string());
        args.push("JSON".to_string());
        args.push(path.display().to_string());
        args
    }

    fn run(&self, args: &[String]) -> Result<String, IngestError> {
        debug!(java = %self.java, ?args, "running tabula");

        let output = Command::new(&self.java)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| IngestError::Spawn {
                command: self.java.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(IngestError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PageExtractor for TabulaExtractor {
    type Error = IngestError;

    fn page_count(&self, path: &Path) -> Result<usize, Self::Error> {
        count_pages(path)
    }

    fn extract_page(
        &self,
        path: &Path,
        page_index: usize,
        region: &PageRegion,
    ) -> Result<Page, Self::Error> {
        let stdout = self.run(&self.command_args(path, page_index, region))?;
        parse_tabula_json(page_index, &stdout)
    }
}

/// tabula's relative area syntax: `%top,left,bottom,right`.
fn area_arg(crop: &CropRect) -> String {
    format!("%{},{},{},{}", crop.top, crop.left, crop.bottom, crop.right)
}
