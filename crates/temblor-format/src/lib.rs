//! Output formatters for temblor, a USGS earthquake feed client.
//!
//! This crate provides formatters for writing ranked earthquake lists
//! to various output formats:
//!
//! - [`TextFormatter`] - Human-readable ranked list for the terminal
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use text::{NO_MATCH_MESSAGE, TextFormatter, summary_line};
