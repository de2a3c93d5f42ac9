//! Human-readable text output.

use std::io::Write;
use temblor_types::Quake;

use crate::{FormatError, Formatter};

/// Message printed when a query matched no events.
pub const NO_MATCH_MESSAGE: &str = "No earthquakes matched your filters.";

/// Builds the one-line summary printed above a non-empty ranked list.
#[must_use]
pub fn summary_line(total: usize, shown: usize) -> String {
    format!("Found {total} earthquakes. Showing up to {shown}:")
}

/// Text formatter producing a numbered, ranked list.
///
/// Row shape: `M4.8 | 2026-02-07 04:12 UTC | depth 12.3 km | place`,
/// with the event page URL on an indented second line when present.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Whether to number rows.
    numbered: bool,
    /// Whether to print event page URLs.
    show_urls: bool,
}

impl TextFormatter {
    /// Creates a new text formatter with default settings (numbered
    /// rows, URLs shown).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numbered: true,
            show_urls: true,
        }
    }

    /// Sets whether rows are numbered.
    #[must_use]
    pub const fn with_numbering(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Sets whether event page URLs are printed.
    #[must_use]
    pub const fn with_urls(mut self, show: bool) -> Self {
        self.show_urls = show;
        self
    }

    /// Formats one event as a single row.
    #[must_use]
    pub fn row(quake: &Quake) -> String {
        format!(
            "{} | {} | depth {:.1} km | {}",
            quake.magnitude_label(),
            quake.time.format("%Y-%m-%d %H:%M UTC"),
            quake.depth_km,
            quake.place,
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_quakes<W: Write + Send>(
        &self,
        quakes: &[Quake],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (i, quake) in quakes.iter().enumerate() {
            if self.numbered {
                writeln!(writer, "{:>2}. {}", i + 1, Self::row(quake))?;
            } else {
                writeln!(writer, "{}", Self::row(quake))?;
            }
            if self.show_urls && !quake.url.is_empty() {
                writeln!(writer, "    USGS page: {}", quake.url)?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_quake() -> Quake {
        Quake::new(
            Some(4.8),
            Utc.with_ymd_and_hms(2026, 2, 7, 4, 12, 0).unwrap(),
            -117.67,
            35.71,
            12.3,
            "10km NW of Ridgecrest, CA".to_string(),
            "https://earthquake.usgs.gov/earthquakes/eventpage/ci12345".to_string(),
        )
    }

    #[test]
    fn test_row_shape() {
        let row = TextFormatter::row(&create_test_quake());
        assert_eq!(
            row,
            "M4.8 | 2026-02-07 04:12 UTC | depth 12.3 km | 10km NW of Ridgecrest, CA"
        );
    }

    #[test]
    fn test_unknown_magnitude_row() {
        let mut quake = create_test_quake();
        quake.magnitude = None;
        assert!(TextFormatter::row(&quake).starts_with("M? |"));
    }

    #[test]
    fn test_numbered_list_with_urls() {
        let formatter = TextFormatter::new();
        let mut output = Cursor::new(Vec::new());
        formatter
            .write_quakes(&[create_test_quake()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with(" 1. M4.8 |"));
        assert!(result.contains("    USGS page: https://"));
    }

    #[test]
    fn test_urls_suppressed() {
        let formatter = TextFormatter::new().with_urls(false);
        let mut output = Cursor::new(Vec::new());
        formatter
            .write_quakes(&[create_test_quake()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("USGS page"));
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let formatter = TextFormatter::new();
        let mut output = Cursor::new(Vec::new());
        formatter.write_quakes(&[], &mut output).unwrap();
        assert!(output.into_inner().is_empty());
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(7, 5),
            "Found 7 earthquakes. Showing up to 5:"
        );
    }
}
