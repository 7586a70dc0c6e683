//! Time types and the ISO-8601 rendering used by the result encoder.

use chrono::{DateTime, SecondsFormat, Utc};

/// The sampling period of one observation.
///
/// Both bounds are optional: a period with no start renders as the
/// configured no-data placeholder, and a period whose end is absent or
/// equal to its start renders as a single instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sonde_core::TimePeriod;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert!(TimePeriod::instant(at).is_instant());
/// assert!(!TimePeriod::between(at, at + chrono::TimeDelta::hours(1)).is_instant());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimePeriod {
    /// Beginning of the period.
    pub start: Option<DateTime<Utc>>,
    /// End of the period.
    pub end: Option<DateTime<Utc>>,
}

impl TimePeriod {
    /// A degenerate period at a single instant.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self {
            start: Some(at),
            end: None,
        }
    }

    /// A period spanning `start..end`.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether the period collapses to a single instant: the end is
    /// absent or equal to the start.
    pub fn is_instant(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start == end,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    }
}

/// Render a UTC instant as ISO-8601 with a `Z` suffix.
///
/// Sub-second digits are emitted only when non-zero, so whole-second
/// instants render as e.g. `2024-01-01T00:00:00Z`.
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn whole_seconds_render_without_fraction() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_instant(at), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn sub_second_precision_is_preserved() {
        let at = Utc
            .with_ymd_and_hms(2024, 6, 15, 12, 30, 45)
            .unwrap()
            .checked_add_signed(chrono::TimeDelta::milliseconds(250))
            .unwrap();
        assert_eq!(format_instant(at), "2024-06-15T12:30:45.250Z");
    }

    #[test]
    fn instant_detection() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(TimePeriod::instant(at).is_instant());
        assert!(TimePeriod::between(at, at).is_instant());
        assert!(!TimePeriod::between(at, at + chrono::TimeDelta::seconds(1)).is_instant());
        assert!(TimePeriod::default().is_instant());
    }
}
