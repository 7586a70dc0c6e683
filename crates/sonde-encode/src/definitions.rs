//! Well-known semantic definition tags.
//!
//! Slot dispatch matches these URI-style tags exactly. Anything else
//! is treated as an observed-property identifier and handled by the
//! default encoder.

/// Sampling period of the observation.
pub const PHENOMENON_TIME: &str = "http://www.opengis.net/def/property/OGC/0/PhenomenonTime";

/// Instant the result became available.
pub const RESULT_TIME: &str = "http://www.opengis.net/def/property/OGC/0/ResultTime";

/// Identifier of the measuring procedure.
pub const PROCEDURE: &str = "http://www.opengis.net/def/param-name/OGC-OM/2.0/om:procedure";

/// Identifier of the feature of interest.
pub const FEATURE_OF_INTEREST: &str =
    "http://www.opengis.net/def/param-name/OGC-OM/2.0/om:featureOfInterest";

/// Point geometry the observation was sampled at.
pub const SAMPLING_GEOMETRY: &str =
    "http://www.opengis.net/def/param-name/OGC-OM/2.0/samplingGeometry";

/// Marks a record as a free-form parameter block.
pub const PARAMETERS: &str = "http://www.opengis.net/def/param-name/OGC-OM/2.0/om:parameter";

/// Northing axis of a spatial vector.
pub const NORTHING: &str = "http://www.opengis.net/def/axis/OGC/1/northing";

/// Easting axis of a spatial vector.
pub const EASTING: &str = "http://www.opengis.net/def/axis/OGC/1/easting";

/// Altitude axis of a spatial vector.
pub const ALTITUDE: &str = "http://www.opengis.net/def/axis/OGC/1/altitude";

/// Horizontal or vertical axis role of one vector component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AxisKind {
    Northing,
    Easting,
    Altitude,
}

/// Classify a vector component by its definition tag or, failing that,
/// its coordinate name. Name matching is case-insensitive and accepts
/// the common geographic aliases.
pub(crate) fn axis_kind(name: &str, definition: &str) -> Option<AxisKind> {
    match definition {
        NORTHING => return Some(AxisKind::Northing),
        EASTING => return Some(AxisKind::Easting),
        ALTITUDE => return Some(AxisKind::Altitude),
        _ => {}
    }
    match name.to_ascii_lowercase().as_str() {
        "northing" | "latitude" | "lat" => Some(AxisKind::Northing),
        "easting" | "longitude" | "lon" | "lng" => Some(AxisKind::Easting),
        "altitude" | "elevation" | "height" | "z" => Some(AxisKind::Altitude),
        _ => None,
    }
}
