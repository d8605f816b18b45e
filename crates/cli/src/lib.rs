//! Command-line front end: load a catalog and an invoice from JSON, print the statement.
//!
//! Input loading lives here, outside the billing crate; the billing crate only
//! ever sees fully built `Catalog` and `Invoice` values.

use std::{fs, path::Path, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use theater_billing::{Catalog, Invoice, Statement};
use theater_observability::LogFormat;

/// Command-line arguments for the `theater-cli` binary.
#[derive(Debug, Parser)]
#[command(name = "theater-cli", version, about = "Render a theater billing statement")]
pub struct CliArgs {
    /// Play catalog (JSON object keyed by play id).
    #[arg(long, env = "THEATER_PLAYS", value_name = "PATH")]
    pub plays: PathBuf,

    /// Invoice to bill (JSON).
    #[arg(long, env = "THEATER_INVOICE", value_name = "PATH")]
    pub invoice: PathBuf,

    #[arg(long, env = "THEATER_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, env = "THEATER_LOG_FORMAT", value_enum, default_value_t = LogStyle::Json)]
    pub log_format: LogStyle,
}

/// Statement output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable statement.
    Text,
    /// Computed statement with raw cent amounts.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogStyle {
    Json,
    Pretty,
}

impl From<LogStyle> for LogFormat {
    fn from(value: LogStyle) -> Self {
        match value {
            LogStyle::Json => LogFormat::Json,
            LogStyle::Pretty => LogFormat::Pretty,
        }
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read play catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse play catalog {}", path.display()))
}

pub fn load_invoice(path: &Path) -> anyhow::Result<Invoice> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read invoice {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse invoice {}", path.display()))
}

/// Compute the statement and encode it in `format`.
pub fn render_output(
    invoice: &Invoice,
    catalog: &Catalog,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let statement = Statement::compute(invoice, catalog)
        .with_context(|| format!("cannot bill customer {}", invoice.customer()))?;

    tracing::info!(
        customer = statement.customer(),
        lines = statement.lines().len(),
        total_amount = statement.total_amount(),
        total_credits = statement.total_credits(),
        "statement computed"
    );

    match format {
        OutputFormat::Text => Ok(statement.render_text()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&statement)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Same as [`run`] but from in-memory JSON documents.
pub fn render_from_json(
    plays_json: &str,
    invoice_json: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let catalog: Catalog =
        serde_json::from_str(plays_json).context("failed to parse play catalog")?;
    let invoice: Invoice =
        serde_json::from_str(invoice_json).context("failed to parse invoice")?;
    render_output(&invoice, &catalog, format)
}

pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let catalog = load_catalog(&args.plays)?;
    let invoice = load_invoice(&args.invoice)?;
    tracing::debug!(
        plays = catalog.len(),
        performances = invoice.performances().len(),
        "inputs loaded"
    );
    render_output(&invoice, &catalog, args.format)
}
