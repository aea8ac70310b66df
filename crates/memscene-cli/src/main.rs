//! `memscene`: convert legacy MEMS 1.6 logs into canonical scenario files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use memscene_core::codec::IdleSpeedOffsetScaling;
use memscene_core::config::ConvertConfig;
use memscene_core::export::{self, OutputFormat};
use memscene_core::ingest::{self, IngestError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Convert readmems, mems-rosco and memsfcr logs into canonical CSV or JSON
#[derive(Parser, Debug)]
#[command(name = "memscene")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MEMS 1.6 log converter", long_about = None)]
struct Cli {
    /// Log file to convert
    #[arg(short, long)]
    file: PathBuf,

    /// Output path; defaults to `<file>.output.<ext>` next to the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// Report the idle speed offset as the raw byte
    #[arg(long)]
    raw_idle_offset: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<ConvertConfig> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConvertConfig::default(),
    };

    if cli.raw_idle_offset {
        config.codec.idle_speed_offset = IdleSpeedOffsetScaling::Raw;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    } else if let Some(format) = cli.output.as_deref().and_then(OutputFormat::from_extension) {
        config.output = format;
    }
    Ok(config)
}

fn default_output(input: &Path, format: OutputFormat) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scenario".to_string());
    input.with_file_name(format!("{name}.output.{}", format.extension()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    let conversion = match ingest::convert_file(&cli.file, &config) {
        Ok(conversion) => conversion,
        Err(e @ (IngestError::UnknownFormat | IngestError::Unsupported(_))) => {
            bail!("cannot convert {}: {e}", cli.file.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("converting {}", cli.file.display()));
        }
    };

    let summary = conversion.report.summary();
    tracing::info!(
        format = %summary.format,
        records = summary.records,
        skipped = summary.skipped,
        discarded_halves = summary.discarded_halves,
        "converted {}",
        cli.file.display()
    );

    if conversion.scenario.is_empty() {
        tracing::warn!("no records converted, nothing written");
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.file, config.output));
    export::save(&output, &conversion.scenario, config.output)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}
