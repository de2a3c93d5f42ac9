//! Display utilities and output plumbing for the temblor CLI.

use anyhow::Result;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use temblor_lib::prelude::*;

/// Output format for the ranked list.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Csv,
    Json,
    Ndjson,
}

/// Spinner shown while the feed request is in flight.
pub(crate) fn fetch_spinner(quiet: bool, window: &TimeWindow) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        pb.set_message(format!("Querying USGS: {window}"));
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

/// Write the ranked list to the writer in the chosen format.
pub(crate) fn write_quakes<W: Write + Send>(
    quakes: &[Quake],
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => TextFormatter::new().write_quakes(quakes, writer)?,
        Format::Csv => CsvFormatter::new().write_quakes(quakes, writer)?,
        Format::Json => JsonFormatter::new().write_quakes(quakes, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_quakes(quakes, writer)?,
    }
    Ok(())
}

/// Routes the ranked list to a file or stdout.
pub(crate) fn emit(
    quakes: &[Quake],
    output: Option<&PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_quakes(quakes, BufWriter::new(file), format)?;
            if !quiet {
                println!("Output written to: {}", path.display());
            }
        }
        None => write_quakes(quakes, std::io::stdout(), format)?,
    }
    Ok(())
}
