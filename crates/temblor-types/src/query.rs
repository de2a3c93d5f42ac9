//! Query controls and the derived lookback window.

use chrono::{DateTime, TimeDelta, Utc};

use crate::{OrderBy, QueryError};

/// Maximum result limit accepted by the event service.
pub const MAX_LIMIT: u32 = 20_000;

/// User-facing controls for one feed query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuakeQuery {
    /// How far back to search, in hours.
    pub lookback_hours: u32,
    /// Minimum magnitude to include.
    pub min_magnitude: f64,
    /// Maximum number of results to request.
    pub limit: u32,
    /// Ordering directive.
    pub order: OrderBy,
}

impl QuakeQuery {
    /// Creates a validated query.
    ///
    /// # Errors
    ///
    /// Returns an error if any control violates [`validate`](Self::validate).
    pub fn new(
        lookback_hours: u32,
        min_magnitude: f64,
        limit: u32,
        order: OrderBy,
    ) -> Result<Self, QueryError> {
        let query = Self {
            lookback_hours,
            min_magnitude,
            limit,
            order,
        };
        query.validate()?;
        Ok(query)
    }

    /// Checks the positivity and range rules for all controls.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookback or limit is zero, the limit
    /// exceeds [`MAX_LIMIT`], or the minimum magnitude is negative or
    /// not finite.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.lookback_hours == 0 {
            return Err(QueryError::NonPositiveLookback);
        }
        if self.limit == 0 {
            return Err(QueryError::NonPositiveLimit);
        }
        if self.limit > MAX_LIMIT {
            return Err(QueryError::LimitTooLarge(self.limit));
        }
        if !self.min_magnitude.is_finite() || self.min_magnitude < 0.0 {
            return Err(QueryError::InvalidMinMagnitude(self.min_magnitude));
        }
        Ok(())
    }

    /// Derives the query window ending at `end`.
    ///
    /// The window start is `end - lookback_hours`.
    #[must_use]
    pub fn window_ending(&self, end: DateTime<Utc>) -> TimeWindow {
        TimeWindow {
            start: end - TimeDelta::hours(i64::from(self.lookback_hours)),
            end,
        }
    }
}

impl Default for QuakeQuery {
    /// Past 24 hours, M2.5 and above, 20 results, largest first.
    fn default() -> Self {
        Self {
            lookback_hours: 24,
            min_magnitude: 2.5,
            limit: 20,
            order: OrderBy::Magnitude,
        }
    }
}

/// UTC time window covered by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (inclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window length in whole hours.
    #[must_use]
    pub fn hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valid_query() {
        let query = QuakeQuery::new(24, 2.5, 20, OrderBy::Magnitude).unwrap();
        assert_eq!(query.lookback_hours, 24);
        assert!((query.min_magnitude - 2.5).abs() < f64::EPSILON);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_zero_magnitude_is_valid() {
        assert!(QuakeQuery::new(1, 0.0, 1, OrderBy::Time).is_ok());
    }

    #[test]
    fn test_zero_lookback_rejected() {
        let err = QuakeQuery::new(0, 2.5, 20, OrderBy::Magnitude).unwrap_err();
        assert_eq!(err, QueryError::NonPositiveLookback);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = QuakeQuery::new(24, 2.5, 0, OrderBy::Magnitude).unwrap_err();
        assert_eq!(err, QueryError::NonPositiveLimit);
    }

    #[test]
    fn test_limit_above_feed_maximum_rejected() {
        let err = QuakeQuery::new(24, 2.5, MAX_LIMIT + 1, OrderBy::Magnitude).unwrap_err();
        assert_eq!(err, QueryError::LimitTooLarge(MAX_LIMIT + 1));
    }

    #[test]
    fn test_negative_magnitude_rejected() {
        let err = QuakeQuery::new(24, -0.5, 20, OrderBy::Magnitude).unwrap_err();
        assert_eq!(err, QueryError::InvalidMinMagnitude(-0.5));
    }

    #[test]
    fn test_non_finite_magnitude_rejected() {
        assert!(QuakeQuery::new(24, f64::NAN, 20, OrderBy::Magnitude).is_err());
        assert!(QuakeQuery::new(24, f64::INFINITY, 20, OrderBy::Magnitude).is_err());
    }

    #[test]
    fn test_window_ending() {
        let end = Utc.with_ymd_and_hms(2026, 2, 7, 12, 0, 0).unwrap();
        let query = QuakeQuery::new(24, 2.5, 20, OrderBy::Magnitude).unwrap();
        let window = query.window_ending(end);

        assert_eq!(window.end, end);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 2, 6, 12, 0, 0).unwrap());
        assert!(window.start < window.end);
        assert_eq!(window.hours(), 24);
    }
}
