//! Magnitude-over-time chart.

use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use plotters::prelude::*;
use temblor_types::Quake;
use thiserror::Error;

/// Errors that can occur during chart rendering.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Nothing to plot: the list is empty or every magnitude is unknown.
    #[error("No plottable events")]
    NoData,

    /// The drawing backend failed.
    #[error("Chart rendering failed: {0}")]
    Backend(String),
}

/// Extracts the chronological `(time, magnitude)` series from a list.
///
/// Events with unknown magnitude are omitted: they cannot be placed on
/// the magnitude axis. The input order does not matter; the series is
/// sorted by time.
#[must_use]
pub fn series_points(quakes: &[Quake]) -> Vec<(DateTime<Utc>, f64)> {
    let mut points: Vec<_> = quakes
        .iter()
        .filter_map(|q| q.magnitude.map(|m| (q.time, m)))
        .collect();
    points.sort_by_key(|&(time, _)| time);
    points
}

/// Magnitude-over-time chart configuration.
#[derive(Debug, Clone)]
pub struct MagnitudeChart {
    /// Chart title.
    pub title: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl Default for MagnitudeChart {
    fn default() -> Self {
        Self {
            title: "Earthquake magnitude over time".to_string(),
            width: 1024,
            height: 576,
        }
    }
}

impl MagnitudeChart {
    /// Creates a chart with the given title and default dimensions.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the output dimensions in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Renders the list to `path` as an SVG chart.
    ///
    /// The list is re-sorted chronologically for readability; ranking
    /// order is a display concern of the text output.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::NoData`] when no event carries a magnitude,
    /// or [`PlotError::Backend`] when drawing fails.
    pub fn render(&self, quakes: &[Quake], path: &Path) -> Result<(), PlotError> {
        let points = series_points(quakes);
        if points.is_empty() {
            return Err(PlotError::NoData);
        }

        let (t_min, t_max) = time_bounds(&points);
        let (m_min, m_max) = magnitude_bounds(&points);

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(to_backend)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(44)
            .y_label_area_size(48)
            .build_cartesian_2d(t_min..t_max, m_min..m_max)
            .map_err(to_backend)?;

        chart
            .configure_mesh()
            .x_labels(8)
            .x_label_formatter(&|t: &DateTime<Utc>| t.format("%m-%d %H:%M").to_string())
            .x_desc("Time (UTC)")
            .y_desc("Magnitude")
            .draw()
            .map_err(to_backend)?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
            .map_err(to_backend)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(time, mag)| Circle::new((time, mag), 3, BLUE.filled())),
            )
            .map_err(to_backend)?;

        root.present().map_err(to_backend)?;
        Ok(())
    }
}

/// Time axis bounds. A single-point series is widened so the axis has
/// a non-zero span.
fn time_bounds(points: &[(DateTime<Utc>, f64)]) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = points[0].0;
    let last = points[points.len() - 1].0;
    if first == last {
        (first - TimeDelta::minutes(30), last + TimeDelta::minutes(30))
    } else {
        (first, last)
    }
}

/// Magnitude axis bounds, padded around the observed range.
fn magnitude_bounds(points: &[(DateTime<Utc>, f64)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, mag) in points {
        min = min.min(mag);
        max = max.max(mag);
    }
    (min - 0.5, max + 0.5)
}

/// Stringifies a backend error; the drawing error types are generic
/// over the backend and not worth threading through the public API.
fn to_backend<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}
