//! Query command implementation.
//!
//! This module handles fetching recent earthquakes and printing the
//! ranked list, optionally rendering the chart as well.

use anyhow::Result;
use std::path::PathBuf;
use temblor_lib::prelude::*;

use crate::display::{self, Format};

/// Query recent earthquakes and print a ranked list.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn query(
    hours: u32,
    min_mag: f64,
    limit: u32,
    order_str: &str,
    format: Format,
    output: Option<PathBuf>,
    plot: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let order = order_str.parse::<OrderBy>()?;
    let query = QuakeQuery::new(hours, min_mag, limit, order)?;

    let (total, ranked) = super::fetch_ranked(&query, quiet).await?;

    match format {
        Format::Text if output.is_none() => {
            if ranked.is_empty() {
                println!("{NO_MATCH_MESSAGE}");
            } else {
                println!("{}", summary_line(total, ranked.len()));
                println!("{}", "-".repeat(80));
                display::write_quakes(&ranked, std::io::stdout(), format)?;
            }
        }
        _ => display::emit(&ranked, output.as_ref(), format, quiet)?,
    }

    if let Some(path) = plot {
        // Empty results short-circuit: nothing to chart is not an error.
        if ranked.is_empty() {
            eprintln!("No data to plot.");
        } else {
            super::render_chart(&query, &ranked, &path, quiet)?;
        }
    }

    Ok(())
}
