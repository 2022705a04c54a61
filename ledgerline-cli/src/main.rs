use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledgerline_core::process_document;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod labels;
mod report;
mod staging;
mod state;

use labels::{LabelStore, NoopLabelStore};
use report::{OutputFormat, StatementReport};
use staging::Staging;

#[derive(Parser, Debug)]
#[command(
    name = "ledgerline",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LEDGERLINE_BUILD_REV"), ")"),
    about = "Extract transactions from bank statement PDFs"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the ordered transaction list from a statement PDF
    Process {
        /// Statement PDF
        pdf: PathBuf,

        /// Issuing bank, recorded in the report
        #[arg(long)]
        bank: Option<String>,

        /// Output format (default from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Set the label of a transaction
    Label {
        transaction_id: String,
        label: String,
    },

    /// Manage ~/.ledgerline/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Process {
            pdf,
            bank,
            format,
            output,
        } => process(pdf, bank, format, output)?,

        Command::Label {
            transaction_id,
            label,
        } => NoopLabelStore.update_label(&transaction_id, &label)?,

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

fn process(
    pdf: PathBuf,
    bank: Option<String>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let extractor = cfg.extractor.build();
    let staging = Staging::new(cfg.storage.staging_dir.clone())?;

    let staged = staging.stage(&pdf)?;
    let result = process_document(&extractor, staged.path());
    if let Err(e) = staged.release() {
        warn!("staged statement cleanup failed: {e:#}");
    }

    let records = match result {
        Ok(records) => records,
        Err(e) => {
            error!(page = e.page_index(), "statement processing failed: {e}");
            return Err(e).with_context(|| format!("processing {}", pdf.display()));
        }
    };
    info!(transactions = records.len(), source = %pdf.display(), "statement extracted");

    let out: Box<dyn Write> = match &output {
        Some(p) => Box::new(File::create(p).with_context(|| format!("create {}", p.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    match format.unwrap_or(cfg.output.format) {
        OutputFormat::Json => {
            let report =
                StatementReport::new(pdf.display().to_string(), bank.as_deref(), &records);
            report::write_json(&mut out, &report, cfg.output.pretty)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => report::write_csv(&mut out, &records)?,
    }
    out.flush()?;

    Ok(())
}
