//! Plot command implementation.
//!
//! This module fetches recent earthquakes and renders only the
//! magnitude-over-time chart.

use anyhow::Result;
use std::path::PathBuf;
use temblor_lib::prelude::*;

/// Render the magnitude-over-time chart for recent earthquakes.
pub(crate) async fn plot(
    hours: u32,
    min_mag: f64,
    limit: u32,
    output: PathBuf,
    quiet: bool,
) -> Result<()> {
    // Time order so the feed-side cap keeps the most recent events;
    // the chart itself plots chronologically.
    let query = QuakeQuery::new(hours, min_mag, limit, OrderBy::Time)?;

    let (_, ranked) = super::fetch_ranked(&query, quiet).await?;

    if ranked.is_empty() {
        println!("{NO_MATCH_MESSAGE}");
        return Ok(());
    }

    super::render_chart(&query, &ranked, &output, quiet)
}
