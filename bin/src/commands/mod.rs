//! CLI command implementations.

pub(crate) mod plot;
pub(crate) mod query;

use anyhow::{Context, Result};
use std::path::Path;
use temblor_lib::prelude::*;

/// Runs the shared fetch-normalize-rank pipeline for a validated query.
///
/// Returns the number of matched events alongside the ranked, truncated
/// list.
pub(crate) async fn fetch_ranked(query: &QuakeQuery, quiet: bool) -> Result<(usize, Vec<Quake>)> {
    let window = query.window_ending(chrono::Utc::now());
    let client = FeedClient::with_defaults().context("Failed to create feed client")?;

    let spinner = crate::display::fetch_spinner(quiet, &window);
    let outcome = client.fetch(query, &window).await;
    spinner.finish_and_clear();

    let collection = outcome.map_err(TemblorError::from)?;
    let total = collection.len();
    let quakes: Vec<_> = collection.quakes().collect();
    let ranked = rank(quakes, query.order, query.limit as usize);
    Ok((total, ranked))
}

/// Renders the chart for an already-ranked list.
///
/// An empty chart is downgraded to a notice: the fetch path already
/// completed and an empty result is not a failure.
pub(crate) fn render_chart(
    query: &QuakeQuery,
    quakes: &[Quake],
    path: &Path,
    quiet: bool,
) -> Result<()> {
    let title = format!(
        "Earthquakes past {}h (min M{})",
        query.lookback_hours, query.min_magnitude
    );

    match MagnitudeChart::new(title).render(quakes, path) {
        Ok(()) => {
            if !quiet {
                println!("Saved plot to: {}", path.display());
            }
            Ok(())
        }
        Err(PlotError::NoData) => {
            eprintln!("No data to plot.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
