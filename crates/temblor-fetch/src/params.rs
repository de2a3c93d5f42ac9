//! Feed query-string construction.

use temblor_types::{QuakeQuery, TimeWindow};

/// Timestamp layout the event service accepts: ISO-8601 at seconds
/// precision, naive UTC (no offset suffix).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Serializes a query and its window into the feed's query parameters.
///
/// # Example
///
/// ```
/// use temblor_fetch::params::query_pairs;
/// use temblor_types::{OrderBy, QuakeQuery, TimeWindow};
/// use chrono::{TimeZone, Utc};
///
/// let query = QuakeQuery::new(24, 2.5, 20, OrderBy::Magnitude).unwrap();
/// let window = query.window_ending(Utc.with_ymd_and_hms(2026, 2, 7, 12, 0, 0).unwrap());
/// let pairs = query_pairs(&query, &window);
/// assert!(pairs.contains(&("starttime", "2026-02-06T12:00:00".to_string())));
/// assert!(pairs.contains(&("orderby", "magnitude".to_string())));
/// ```
#[must_use]
pub fn query_pairs(query: &QuakeQuery, window: &TimeWindow) -> Vec<(&'static str, String)> {
    vec![
        ("format", "geojson".to_string()),
        ("starttime", window.start.format(TIME_FORMAT).to_string()),
        ("endtime", window.end.format(TIME_FORMAT).to_string()),
        ("minmagnitude", query.min_magnitude.to_string()),
        ("orderby", query.order.as_str().to_string()),
        ("limit", query.limit.to_string()),
    ]
}
