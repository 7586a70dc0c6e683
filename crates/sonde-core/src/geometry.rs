//! Geometry value types carried by observation records.
//!
//! Geometries are plain owned data: a [`Shape`] tagged union plus the
//! [`CrsId`] the coordinates are expressed in. All operations over them
//! (axis switching, WKT rendering, projection) live in `sonde-geom`;
//! this module only defines the shapes and cheap accessors.

use crate::id::CrsId;

/// One vertex: easting/northing (or x/y in a projected CRS) plus an
/// optional elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// First horizontal axis value as stored.
    pub x: f64,
    /// Second horizontal axis value as stored.
    pub y: f64,
    /// Elevation, if the geometry is 3D.
    pub z: Option<f64>,
}

impl Coordinate {
    /// A 2D coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// A 3D coordinate.
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// The same vertex with the two horizontal axes exchanged.
    /// Elevation is untouched.
    pub fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
}

/// A closed ring of coordinates (first vertex == last vertex by
/// convention; not enforced here).
pub type Ring = Vec<Coordinate>;

/// Tagged union over the geometry subtypes the encoder understands.
///
/// `Extension` is the escape hatch for geometry kinds produced by
/// datasource plugins: it owns an inner shape and every operation
/// delegates to it, so downstream code never needs to know the wrapper
/// exists.
///
/// # Examples
///
/// ```
/// use sonde_core::geometry::{Coordinate, Shape};
///
/// let point = Shape::Point(Coordinate::with_z(52.7, 7.9, 12.0));
/// assert_eq!(point.vertex_count(), 1);
///
/// let wrapped = Shape::Extension(Box::new(point));
/// assert_eq!(wrapped.vertex_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single position.
    Point(Coordinate),
    /// An open sequence of positions.
    LineString(Vec<Coordinate>),
    /// An outer ring with zero or more holes.
    Polygon {
        /// The outer boundary.
        exterior: Ring,
        /// Interior rings (holes).
        interiors: Vec<Ring>,
    },
    /// A set of independent points.
    MultiPoint(Vec<Coordinate>),
    /// A set of independent line strings.
    MultiLineString(Vec<Vec<Coordinate>>),
    /// A set of independent polygons, each `(exterior, interiors)`.
    MultiPolygon(Vec<(Ring, Vec<Ring>)>),
    /// A heterogeneous collection of shapes sharing the owner's CRS.
    Collection(Vec<Shape>),
    /// An unknown/extension geometry delegating to its wrapped shape.
    Extension(Box<Shape>),
}

impl Shape {
    /// Total number of vertices across every sub-shape.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Point(_) => 1,
            Self::LineString(coords) | Self::MultiPoint(coords) => coords.len(),
            Self::Polygon {
                exterior,
                interiors,
            } => exterior.len() + interiors.iter().map(Vec::len).sum::<usize>(),
            Self::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
            Self::MultiPolygon(polys) => polys
                .iter()
                .map(|(ext, ints)| ext.len() + ints.iter().map(Vec::len).sum::<usize>())
                .sum(),
            Self::Collection(shapes) => shapes.iter().map(Shape::vertex_count).sum(),
            Self::Extension(inner) => inner.vertex_count(),
        }
    }

    /// Name of the subtype, for error messages. `Extension` reports the
    /// wrapped subtype.
    pub fn subtype_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::Collection(_) => "GeometryCollection",
            Self::Extension(inner) => inner.subtype_name(),
        }
    }

    /// The single position of a point shape, unwrapping `Extension`
    /// layers. `None` for every other subtype.
    pub fn as_point(&self) -> Option<Coordinate> {
        match self {
            Self::Point(c) => Some(*c),
            Self::Extension(inner) => inner.as_point(),
            _ => None,
        }
    }
}

/// A shape bound to the CRS its coordinates are expressed in.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// CRS of every coordinate in `shape`.
    pub crs: CrsId,
    /// The geometry itself.
    pub shape: Shape,
}

impl Geometry {
    /// A 2D point geometry.
    pub fn point(crs: CrsId, x: f64, y: f64) -> Self {
        Self {
            crs,
            shape: Shape::Point(Coordinate::new(x, y)),
        }
    }

    /// A 3D point geometry.
    pub fn point_3d(crs: CrsId, x: f64, y: f64, z: f64) -> Self {
        Self {
            crs,
            shape: Shape::Point(Coordinate::with_z(x, y, z)),
        }
    }

    /// Total vertex count of the contained shape.
    pub fn vertex_count(&self) -> usize {
        self.shape.vertex_count()
    }
}
