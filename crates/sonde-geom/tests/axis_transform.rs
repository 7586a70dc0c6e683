//! Storage-transform tests for the axis-order policy.
//!
//! These live as an integration test (rather than inline unit tests)
//! because they exercise `MockProjection` from `sonde-test-utils`, which
//! depends on `sonde-geom`. An inline `#[cfg(test)]` module would rebuild
//! `sonde-geom` under `cfg(test)` and see a second, incompatible copy of
//! the `CrsProjection` trait; an integration test links the ordinary
//! crate, the same one the mock implements against.

use sonde_core::geometry::{Coordinate, Geometry, Shape};
use sonde_core::{CrsId, TransformError};
use sonde_geom::AxisOrderPolicy;
use sonde_test_utils::MockProjection;

#[test]
fn transform_skips_projection_when_already_in_storage_crs() {
    let policy = AxisOrderPolicy::new([CrsId(4326)], CrsId(4326), true);
    let projection = MockProjection::failing();
    let geometry = Geometry::point(CrsId(4326), 7.0, 52.0);
    // Same CRS and matching axis orders: geometry passes through.
    let out = policy
        .transform_to_storage_crs(&geometry, &projection)
        .unwrap();
    assert_eq!(out, geometry);
}

#[test]
fn transform_switches_axes_on_declared_mismatch() {
    // Storage CRS is northing-first but the datasource is not.
    let policy = AxisOrderPolicy::new([CrsId(4326)], CrsId(4326), false);
    let projection = MockProjection::identity();
    let geometry = Geometry::point(CrsId(4326), 7.0, 52.0);
    let out = policy
        .transform_to_storage_crs(&geometry, &projection)
        .unwrap();
    assert_eq!(out, Geometry::point(CrsId(4326), 52.0, 7.0));
}

#[test]
fn transform_projects_and_preserves_topology() {
    let policy = AxisOrderPolicy::new([CrsId(4326)], CrsId(3857), true);
    let projection = MockProjection::scaling(2.0);
    let geometry = Geometry {
        crs: CrsId(4326),
        shape: Shape::LineString(vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::new(3.0, 4.0),
        ]),
    };
    let out = policy
        .transform_to_storage_crs(&geometry, &projection)
        .unwrap();
    assert_eq!(out.crs, CrsId(3857));
    assert_eq!(out.vertex_count(), geometry.vertex_count());
    assert_eq!(out.shape.subtype_name(), "LineString");
    // Datasource is northing-first, storage EPSG:3857 is not: axes switch
    // after the scale-by-2 projection.
    assert_eq!(
        out.shape,
        Shape::LineString(vec![Coordinate::new(4.0, 2.0), Coordinate::new(8.0, 6.0)])
    );
}

#[test]
fn transform_surfaces_projection_failure() {
    let policy = AxisOrderPolicy::new([CrsId(4326)], CrsId(3857), true);
    let projection = MockProjection::failing();
    let geometry = Geometry::point(CrsId(4326), 1.0, 2.0);
    let err = policy
        .transform_to_storage_crs(&geometry, &projection)
        .unwrap_err();
    assert!(matches!(err, TransformError::ProjectionFailed { .. }));
}
