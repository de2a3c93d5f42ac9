//! Core types for temblor, a USGS earthquake feed client.
//!
//! This crate provides the fundamental data structures used throughout temblor:
//!
//! - [`Quake`] - A single earthquake event with magnitude, UTC time, location, and depth
//! - [`QuakeQuery`] - Validated user-facing query controls
//! - [`TimeWindow`] - The UTC lookback window derived from a query
//! - [`OrderBy`] - Result ordering directive
//! - [`TemblorError`] - Error taxonomy shared across the workspace

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod order;
mod quake;
mod query;

pub use error::{QueryError, Result, TemblorError};
pub use order::{OrderBy, OrderParseError};
pub use quake::Quake;
pub use query::{MAX_LIMIT, QuakeQuery, TimeWindow};
