//! CRS axis-order policy and coordinate axis switching.
//!
//! Some coordinate reference systems store the northing axis first
//! (e.g. EPSG:4326 as defined), others easting-first. The policy is
//! configured from externally supplied CRS lists and answers the
//! membership question; [`switch_axis_order`] is the pure coordinate
//! operation it applies when orders disagree.

use indexmap::IndexSet;

use sonde_core::geometry::{Geometry, Ring, Shape};
use sonde_core::{CrsId, TransformError};

use crate::projection::CrsProjection;

/// Axis-order policy: which CRSs are northing-first, which CRS the
/// datasource stores geometries in, and the axis order the datasource
/// itself declares.
///
/// The policy is read-only after construction and may be shared across
/// concurrently running encode calls.
///
/// # Examples
///
/// ```
/// use sonde_core::CrsId;
/// use sonde_geom::AxisOrderPolicy;
///
/// let policy = AxisOrderPolicy::new([CrsId(4326), CrsId(31466)], CrsId(4326), true);
/// assert!(policy.is_northing_first(CrsId(4326)));
/// assert!(!policy.is_northing_first(CrsId(3857)));
/// ```
#[derive(Clone, Debug)]
pub struct AxisOrderPolicy {
    northing_first: IndexSet<CrsId>,
    storage_crs: CrsId,
    datasource_northing_first: bool,
}

impl AxisOrderPolicy {
    /// Build a policy from the configured northing-first CRS set, the
    /// storage CRS, and the datasource's declared axis order.
    pub fn new(
        northing_first: impl IntoIterator<Item = CrsId>,
        storage_crs: CrsId,
        datasource_northing_first: bool,
    ) -> Self {
        Self {
            northing_first: northing_first.into_iter().collect(),
            storage_crs,
            datasource_northing_first,
        }
    }

    /// Whether the CRS natively stores its northing axis first.
    /// Pure set membership against the configured identifiers.
    pub fn is_northing_first(&self, crs: CrsId) -> bool {
        self.northing_first.contains(&crs)
    }

    /// The CRS the datasource stores geometries in.
    pub fn storage_crs(&self) -> CrsId {
        self.storage_crs
    }

    /// Reproject a geometry to the storage CRS and reconcile axis order.
    ///
    /// Projection is delegated to the supplied capability. Afterwards,
    /// if the datasource's declared axis order differs from the storage
    /// CRS's declared order, the horizontal axes are switched. Subtype
    /// and vertex count are preserved throughout.
    pub fn transform_to_storage_crs(
        &self,
        geometry: &Geometry,
        projection: &dyn CrsProjection,
    ) -> Result<Geometry, TransformError> {
        let projected = if geometry.crs == self.storage_crs {
            geometry.clone()
        } else {
            projection.project(geometry, self.storage_crs)?
        };
        if self.datasource_northing_first != self.is_northing_first(self.storage_crs) {
            Ok(switch_axis_order(&projected))
        } else {
            Ok(projected)
        }
    }
}

/// Return a new geometry with the two horizontal axes exchanged on
/// every vertex of every sub-shape. Elevations and the CRS identifier
/// are preserved; the input is not mutated.
///
/// Applying the switch twice restores the original coordinates.
pub fn switch_axis_order(geometry: &Geometry) -> Geometry {
    Geometry {
        crs: geometry.crs,
        shape: swap_shape(&geometry.shape),
    }
}

fn swap_ring(ring: &Ring) -> Ring {
    ring.iter().map(|c| c.swapped()).collect()
}

fn swap_shape(shape: &Shape) -> Shape {
    match shape {
        Shape::Point(c) => Shape::Point(c.swapped()),
        Shape::LineString(coords) => Shape::LineString(swap_ring(coords)),
        Shape::Polygon {
            exterior,
            interiors,
        } => Shape::Polygon {
            exterior: swap_ring(exterior),
            interiors: interiors.iter().map(swap_ring).collect(),
        },
        Shape::MultiPoint(coords) => Shape::MultiPoint(swap_ring(coords)),
        Shape::MultiLineString(lines) => {
            Shape::MultiLineString(lines.iter().map(swap_ring).collect())
        }
        Shape::MultiPolygon(polys) => Shape::MultiPolygon(
            polys
                .iter()
                .map(|(ext, ints)| (swap_ring(ext), ints.iter().map(swap_ring).collect()))
                .collect(),
        ),
        Shape::Collection(shapes) => Shape::Collection(shapes.iter().map(swap_shape).collect()),
        Shape::Extension(inner) => Shape::Extension(Box::new(swap_shape(inner))),
    }
}
