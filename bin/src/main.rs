//! temblor CLI - Recent earthquakes from the USGS event service.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "temblor")]
#[command(about = "Fetch and explore recent earthquakes from the USGS event service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Query recent earthquakes and print a ranked list
    Query {
        /// How far back to search, in hours
        #[arg(long, default_value = "24")]
        hours: u32,

        /// Minimum magnitude filter
        #[arg(long = "min-mag", default_value = "2.5")]
        min_mag: f64,

        /// Max number of results to return (the feed caps this at 20000)
        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// How to sort displayed results (magnitude or time)
        #[arg(long, default_value = "magnitude")]
        order: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also render a magnitude-over-time chart (SVG) to this path
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// Render the magnitude-over-time chart only
    Plot {
        /// How far back to search, in hours
        #[arg(long, default_value = "24")]
        hours: u32,

        /// Minimum magnitude filter
        #[arg(long = "min-mag", default_value = "2.5")]
        min_mag: f64,

        /// Max number of events to chart (the feed caps this at 20000)
        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// Chart output path (SVG)
        #[arg(short, long, default_value = "quakes.svg")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Query {
            hours,
            min_mag,
            limit,
            order,
            format,
            output,
            plot,
        } => {
            commands::query::query(hours, min_mag, limit, &order, format, output, plot, cli.quiet)
                .await
        }
        Commands::Plot {
            hours,
            min_mag,
            limit,
            output,
        } => commands::plot::plot(hours, min_mag, limit, output, cli.quiet).await,
    }
}
