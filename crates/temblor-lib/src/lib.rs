//! Rust library for querying recent earthquakes from the USGS event service.
//!
//! This is a facade crate that re-exports functionality from the temblor
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use temblor_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let query = QuakeQuery::new(24, 2.5, 20, OrderBy::Magnitude)?;
//!     let window = query.window_ending(chrono::Utc::now());
//!
//!     let client = FeedClient::with_defaults()?;
//!     let quakes: Vec<_> = client.fetch(&query, &window).await?.quakes().collect();
//!     let ranked = rank(quakes, query.order, query.limit as usize);
//!
//!     for quake in &ranked {
//!         println!("{}", TextFormatter::row(quake));
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use temblor_types::*;

// Re-export the feed client
#[cfg(feature = "fetch")]
pub use temblor_fetch::{ClientConfig, FeatureCollection, FeedClient, FetchError, QUERY_ENDPOINT};

// Re-export ranking
#[cfg(feature = "rank")]
pub use temblor_rank::rank;

// Re-export formatters
#[cfg(feature = "format")]
pub use temblor_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, NO_MATCH_MESSAGE, OutputFormat,
    TextFormatter, summary_line,
};

// Re-export chart rendering
#[cfg(feature = "plot")]
pub use temblor_plot::{MagnitudeChart, PlotError};

/// Prelude module for convenient imports.
///
/// ```
/// use temblor_lib::prelude::*;
/// ```
pub mod prelude {
    pub use temblor_types::{
        MAX_LIMIT, OrderBy, Quake, QuakeQuery, QueryError, Result, TemblorError, TimeWindow,
    };

    #[cfg(feature = "fetch")]
    pub use temblor_fetch::{ClientConfig, FeatureCollection, FeedClient, FetchError};

    #[cfg(feature = "rank")]
    pub use temblor_rank::rank;

    #[cfg(feature = "format")]
    pub use temblor_format::{
        CsvFormatter, Formatter, JsonFormatter, NO_MATCH_MESSAGE, OutputFormat, TextFormatter,
        summary_line,
    };

    #[cfg(feature = "plot")]
    pub use temblor_plot::{MagnitudeChart, PlotError};
}
