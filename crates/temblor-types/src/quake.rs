//! Earthquake event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single earthquake event as reported by the feed.
///
/// Records are immutable once constructed; they carry no identity beyond
/// their position in a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quake {
    /// Event magnitude. The feed omits this for some events
    /// (instrument limitations).
    pub magnitude: Option<f64>,
    /// Occurrence time (UTC).
    pub time: DateTime<Utc>,
    /// Epicenter longitude in degrees.
    pub longitude: f64,
    /// Epicenter latitude in degrees.
    pub latitude: f64,
    /// Hypocenter depth in kilometers.
    pub depth_km: f64,
    /// Human-readable location description. Empty when the feed omits it.
    pub place: String,
    /// Event page URL. Empty when the feed omits it.
    pub url: String,
}

impl Quake {
    /// Creates a new event record.
    #[must_use]
    pub const fn new(
        magnitude: Option<f64>,
        time: DateTime<Utc>,
        longitude: f64,
        latitude: f64,
        depth_km: f64,
        place: String,
        url: String,
    ) -> Self {
        Self {
            magnitude,
            time,
            longitude,
            latitude,
            depth_km,
            place,
            url,
        }
    }

    /// Sort key for magnitude ranking.
    ///
    /// Events with unknown magnitude rank below every known magnitude.
    #[must_use]
    pub fn magnitude_key(&self) -> f64 {
        self.magnitude.unwrap_or(f64::NEG_INFINITY)
    }

    /// Magnitude rendered as `M4.8`, or `M?` when unknown.
    #[must_use]
    pub fn magnitude_label(&self) -> String {
        match self.magnitude {
            Some(mag) => format!("M{mag:.1}"),
            None => "M?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quake(magnitude: Option<f64>) -> Quake {
        Quake::new(
            magnitude,
            Utc.with_ymd_and_hms(2026, 2, 7, 4, 12, 0).unwrap(),
            -117.5,
            35.7,
            12.3,
            "10km NW of Somewhere".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_magnitude_label() {
        assert_eq!(quake(Some(4.82)).magnitude_label(), "M4.8");
        assert_eq!(quake(Some(4.0)).magnitude_label(), "M4.0");
        assert_eq!(quake(None).magnitude_label(), "M?");
    }

    #[test]
    fn test_magnitude_key_ranks_unknown_lowest() {
        assert!(quake(None).magnitude_key() < quake(Some(-1.2)).magnitude_key());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = quake(Some(5.1));
        let json = serde_json::to_string(&original).unwrap();
        let back: Quake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
