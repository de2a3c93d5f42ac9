//! HTTP client and query pipeline for the temblor earthquake feed client.
//!
//! This crate provides the query-and-normalize pipeline:
//!
//! - [`params::query_pairs`] - Serializes a query into the feed's parameters
//! - [`FeedClient`] - Single-attempt HTTP client for the event service
//! - [`geojson`] - Response schema and lazy record normalization

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod geojson;
pub mod params;

pub use client::{ClientConfig, FeedClient, FetchError, QUERY_ENDPOINT};
pub use geojson::{Feature, FeatureCollection};
