//! GeoJSON response schema and record normalization.
//!
//! The feed's response is loosely typed JSON; this module pins it to an
//! explicit schema at the parsing boundary so malformed responses fail
//! early instead of propagating untyped maps through the pipeline.

use chrono::DateTime;
use serde::Deserialize;
use temblor_types::Quake;

/// Top-level GeoJSON response object.
///
/// `features` is required: a response without a feature list does not
/// deserialize and surfaces as a malformed-response error.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    /// Raw earthquake feature entries.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Lazily normalizes every feature into a [`Quake`].
    ///
    /// The sequence is finite and single-pass; iterating again requires
    /// re-fetching. Features with no usable timestamp or fewer than
    /// three geometry coordinates are skipped.
    pub fn quakes(self) -> impl Iterator<Item = Quake> {
        self.features.into_iter().filter_map(Feature::normalize)
    }

    /// Number of raw features in the response.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the response matched no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One raw earthquake feature: a `properties` object plus a point
/// geometry whose coordinates are `[longitude, latitude, depth_km]`.
#[derive(Debug, Deserialize)]
pub struct Feature {
    properties: Properties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

impl Feature {
    /// Normalizes this feature into a [`Quake`].
    ///
    /// Pure: identical input always yields the identical record. The
    /// occurrence time is `epoch + milliseconds`. A null magnitude is
    /// kept as unknown rather than dropping the event; `place` and `url`
    /// default to empty strings. Returns `None` when the timestamp is
    /// missing or out of range, or the geometry is short.
    #[must_use]
    pub fn normalize(self) -> Option<Quake> {
        let time = DateTime::from_timestamp_millis(self.properties.time?)?;

        let coords = &self.geometry.coordinates;
        if coords.len() < 3 {
            return None;
        }

        Some(Quake::new(
            self.properties.mag,
            time,
            coords[0],
            coords[1],
            coords[2],
            self.properties.place.unwrap_or_default(),
            self.properties.url.unwrap_or_default(),
        ))
    }
}
