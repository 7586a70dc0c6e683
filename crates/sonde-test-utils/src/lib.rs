//! Test utilities and mock types for Sonde development.
//!
//! Provides a mock [`CrsProjection`] implementation with deliberately
//! fake (but topology-preserving) math, proptest strategies for
//! geometry shapes, and small fixture helpers shared by the unit and
//! integration tests across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use sonde_core::geometry::{Coordinate, Geometry, Ring, Shape};
use sonde_core::{CrsId, DatasetRef, ObservationRecord, ObservationValue, TimePeriod, TransformError};
use sonde_geom::CrsProjection;

/// Mock implementation of [`CrsProjection`].
///
/// The math is intentionally fake (`Scaling` multiplies both
/// horizontal axes by a constant) but the trait contract holds: the
/// output CRS is the target, subtype and vertex count are preserved,
/// and elevations pass through untouched. That is all the axis-order
/// policy relies on.
pub struct MockProjection {
    mode: Mode,
}

enum Mode {
    Identity,
    Scaling(f64),
    Failing,
}

impl MockProjection {
    /// Relabels the CRS without touching coordinates.
    pub fn identity() -> Self {
        Self {
            mode: Mode::Identity,
        }
    }

    /// Multiplies both horizontal axes by `factor`.
    pub fn scaling(factor: f64) -> Self {
        Self {
            mode: Mode::Scaling(factor),
        }
    }

    /// Fails every projection, for error-path tests.
    pub fn failing() -> Self {
        Self { mode: Mode::Failing }
    }
}

impl CrsProjection for MockProjection {
    fn project(&self, geometry: &Geometry, target: CrsId) -> Result<Geometry, TransformError> {
        match self.mode {
            Mode::Identity => Ok(Geometry {
                crs: target,
                shape: geometry.shape.clone(),
            }),
            Mode::Scaling(factor) => Ok(Geometry {
                crs: target,
                shape: scale_shape(&geometry.shape, factor),
            }),
            Mode::Failing => Err(TransformError::ProjectionFailed {
                from: geometry.crs,
                to: target,
                reason: "mock projection configured to fail".into(),
            }),
        }
    }
}

fn scale_ring(ring: &Ring, factor: f64) -> Ring {
    ring.iter()
        .map(|c| Coordinate {
            x: c.x * factor,
            y: c.y * factor,
            z: c.z,
        })
        .collect()
}

fn scale_shape(shape: &Shape, factor: f64) -> Shape {
    match shape {
        Shape::Point(c) => Shape::Point(Coordinate {
            x: c.x * factor,
            y: c.y * factor,
            z: c.z,
        }),
        Shape::LineString(coords) => Shape::LineString(scale_ring(coords, factor)),
        Shape::Polygon {
            exterior,
            interiors,
        } => Shape::Polygon {
            exterior: scale_ring(exterior, factor),
            interiors: interiors.iter().map(|r| scale_ring(r, factor)).collect(),
        },
        Shape::MultiPoint(coords) => Shape::MultiPoint(scale_ring(coords, factor)),
        Shape::MultiLineString(lines) => {
            Shape::MultiLineString(lines.iter().map(|l| scale_ring(l, factor)).collect())
        }
        Shape::MultiPolygon(polys) => Shape::MultiPolygon(
            polys
                .iter()
                .map(|(ext, ints)| {
                    (
                        scale_ring(ext, factor),
                        ints.iter().map(|r| scale_ring(r, factor)).collect(),
                    )
                })
                .collect(),
        ),
        Shape::Collection(shapes) => {
            Shape::Collection(shapes.iter().map(|s| scale_shape(s, factor)).collect())
        }
        Shape::Extension(inner) => Shape::Extension(Box::new(scale_shape(inner, factor))),
    }
}

// ── proptest strategies ──────────────────────────────────────────────

/// Finite coordinates only: NaN would break the involution property's
/// equality check without telling us anything about axis switching.
pub fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (
        -1.0e6..1.0e6f64,
        -1.0e6..1.0e6f64,
        proptest::option::of(-1.2e4..9.0e3f64),
    )
        .prop_map(|(x, y, z)| Coordinate { x, y, z })
}

/// Arbitrary geometry shapes, recursing through collections and
/// extension wrappers up to three levels deep.
pub fn shape_strategy() -> impl Strategy<Value = Shape> {
    let coords = || prop::collection::vec(coordinate_strategy(), 0..6);
    let rings = || prop::collection::vec(prop::collection::vec(coordinate_strategy(), 3..6), 0..3);
    let leaf = prop_oneof![
        coordinate_strategy().prop_map(Shape::Point),
        coords().prop_map(Shape::LineString),
        coords().prop_map(Shape::MultiPoint),
        (prop::collection::vec(coordinate_strategy(), 3..6), rings()).prop_map(
            |(exterior, interiors)| Shape::Polygon {
                exterior,
                interiors,
            }
        ),
        rings().prop_map(Shape::MultiLineString),
        prop::collection::vec((prop::collection::vec(coordinate_strategy(), 3..6), rings()), 0..3)
            .prop_map(Shape::MultiPolygon),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Collection),
            inner.prop_map(|s| Shape::Extension(Box::new(s))),
        ]
    })
}

// ── fixtures ─────────────────────────────────────────────────────────

/// Shorthand for a whole-second UTC instant.
pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// A dataset reference with all three identifiers set.
pub fn dataset(procedure: &str, feature: &str, observed_property: &str) -> DatasetRef {
    DatasetRef {
        procedure: procedure.into(),
        feature_of_interest: feature.into(),
        observed_property: observed_property.into(),
    }
}

/// A quantity record for `observed_property`, sampled at `at`.
pub fn quantity_record(
    observed_property: &str,
    value: f64,
    at: DateTime<Utc>,
) -> ObservationRecord {
    let mut record = ObservationRecord::new(dataset(
        "http://example.org/procedure/ctd-1",
        "http://example.org/feature/station-a",
        observed_property,
    ));
    record.phenomenon_time = TimePeriod::instant(at);
    record.value = Some(ObservationValue::Quantity(value));
    record
}
