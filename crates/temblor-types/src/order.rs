//! Result ordering directives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How query results are ordered. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Largest magnitude first.
    #[default]
    Magnitude,
    /// Most recent event first.
    Time,
}

impl OrderBy {
    /// Returns the directive as a string identifier.
    ///
    /// This is also the value the event service accepts for its
    /// `orderby` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Magnitude => "magnitude",
            Self::Time => "time",
        }
    }

    /// Returns all available directives.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Magnitude, Self::Time]
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognized ordering directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown order: {0} (expected 'magnitude' or 'time')")]
pub struct OrderParseError(String);

impl FromStr for OrderBy {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "magnitude" | "mag" => Ok(Self::Magnitude),
            "time" => Ok(Self::Time),
            _ => Err(OrderParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!("magnitude".parse::<OrderBy>().unwrap(), OrderBy::Magnitude);
        assert_eq!("mag".parse::<OrderBy>().unwrap(), OrderBy::Magnitude);
        assert_eq!("TIME".parse::<OrderBy>().unwrap(), OrderBy::Time);
        assert!("depth".parse::<OrderBy>().is_err());
    }

    #[test]
    fn test_order_roundtrip() {
        for order in OrderBy::all() {
            assert_eq!(order.as_str().parse::<OrderBy>().unwrap(), *order);
        }
    }

    #[test]
    fn test_default_is_magnitude() {
        assert_eq!(OrderBy::default(), OrderBy::Magnitude);
    }
}
