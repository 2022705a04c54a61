use anyhow::{Context, Result};
use ledgerline_ingest::TabulaExtractor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;
use crate::state::ensure_ledgerline_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub extractor: ExtractorSection,
    pub storage: StorageSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorSection {
    /// Java launcher used to run tabula
    pub java: String,
    /// tabula-java jar-with-dependencies
    pub tabula_jar: PathBuf,
    /// Extra JVM flags, e.g. ["-Xmx1g", "-Djava.awt.headless=true"]
    pub jvm_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageSection {
    /// Where uploads are staged while processed (default: system temp dir)
    pub staging_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for ExtractorSection {
    fn default() -> Self {
        Self {
            java: "java".to_string(),
            tabula_jar: PathBuf::from("tabula.jar"),
            jvm_args: vec!["-Djava.awt.headless=true".to_string()],
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl ExtractorSection {
    pub fn build(&self) -> TabulaExtractor {
        TabulaExtractor::new(&self.tabula_jar)
            .with_java(&self.java)
            .with_jvm_args(self.jvm_args.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_ledgerline_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    read_config(&config_path()?)
}

pub fn read_config(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
