//! Result ranking for temblor, a USGS earthquake feed client.
//!
//! This crate provides the one pure transformation between normalization
//! and presentation: [`rank`] orders a batch of [`Quake`] records and
//! truncates it to the query's result limit.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tectonica-labs/temblor/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use temblor_types::{OrderBy, Quake};

/// Orders `quakes` by the given directive and truncates to `limit`.
///
/// Deterministic and side-effect free. Magnitude order is descending
/// with unknown magnitudes last; magnitude ties break to the more recent
/// event. Time order is descending (most recent first).
#[must_use]
pub fn rank(mut quakes: Vec<Quake>, order: OrderBy, limit: usize) -> Vec<Quake> {
    match order {
        OrderBy::Magnitude => quakes.sort_by(by_magnitude_desc),
        OrderBy::Time => quakes.sort_by(|a, b| b.time.cmp(&a.time)),
    }
    quakes.truncate(limit);
    quakes
}

/// Descending magnitude, unknown last, recency as tie-break.
fn by_magnitude_desc(a: &Quake, b: &Quake) -> Ordering {
    b.magnitude_key()
        .total_cmp(&a.magnitude_key())
        .then_with(|| b.time.cmp(&a.time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 7, 4, minute, 0).unwrap()
    }

    fn quake(magnitude: Option<f64>, minute: u32) -> Quake {
        Quake::new(
            magnitude,
            at(minute),
            -117.5,
            35.7,
            10.0,
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn test_magnitude_order_is_non_increasing() {
        let quakes = vec![
            quake(Some(3.1), 0),
            quake(Some(5.6), 1),
            quake(Some(4.2), 2),
            quake(Some(6.0), 3),
        ];
        let ranked = rank(quakes, OrderBy::Magnitude, 10);

        let mags: Vec<_> = ranked.iter().map(|q| q.magnitude.unwrap()).collect();
        assert_eq!(mags, vec![6.0, 5.6, 4.2, 3.1]);
        for pair in ranked.windows(2) {
            assert!(pair[0].magnitude_key() >= pair[1].magnitude_key());
        }
    }

    #[test]
    fn test_truncates_to_limit() {
        let quakes: Vec<_> = (0..7).map(|i| quake(Some(f64::from(i)), i)).collect();
        let ranked = rank(quakes, OrderBy::Magnitude, 5);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].magnitude, Some(6.0));
        assert_eq!(ranked[4].magnitude, Some(2.0));
    }

    #[test]
    fn test_limit_larger_than_input() {
        let ranked = rank(vec![quake(Some(4.0), 0)], OrderBy::Magnitude, 100);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_magnitude_tie_breaks_to_more_recent() {
        let older = quake(Some(4.5), 10);
        let newer = quake(Some(4.5), 30);
        let ranked = rank(vec![older.clone(), newer.clone()], OrderBy::Magnitude, 10);

        assert_eq!(ranked[0], newer);
        assert_eq!(ranked[1], older);
    }

    #[test]
    fn test_unknown_magnitude_ranks_last() {
        let quakes = vec![
            quake(None, 3),
            quake(Some(-0.8), 1),
            quake(Some(5.0), 2),
        ];
        let ranked = rank(quakes, OrderBy::Magnitude, 10);

        assert_eq!(ranked[0].magnitude, Some(5.0));
        assert_eq!(ranked[1].magnitude, Some(-0.8));
        assert_eq!(ranked[2].magnitude, None);
    }

    #[test]
    fn test_time_order_is_most_recent_first() {
        let quakes = vec![
            quake(Some(2.0), 5),
            quake(Some(6.0), 1),
            quake(Some(4.0), 59),
        ];
        let ranked = rank(quakes, OrderBy::Time, 10);

        assert_eq!(ranked[0].time, at(59));
        assert_eq!(ranked[1].time, at(5));
        assert_eq!(ranked[2].time, at(1));
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(rank(Vec::new(), OrderBy::Magnitude, 5).is_empty());
    }

    #[test]
    fn test_rank_is_deterministic() {
        let quakes = vec![quake(Some(4.5), 10), quake(Some(4.5), 30), quake(None, 2)];
        let first = rank(quakes.clone(), OrderBy::Magnitude, 10);
        let second = rank(quakes, OrderBy::Magnitude, 10);
        assert_eq!(first, second);
    }
}
