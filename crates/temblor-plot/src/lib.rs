//! Chart rendering for temblor, a USGS earthquake feed client.
//!
//! This crate renders a normalized earthquake list as a
//! magnitude-over-time chart:
//!
//! - [`MagnitudeChart`] - Chart configuration and SVG rendering
//! - [`series_points`] - Pure extraction of the chronological series

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;

pub use chart::{MagnitudeChart, PlotError, series_points};
