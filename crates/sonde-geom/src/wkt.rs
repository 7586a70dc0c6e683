//! Well-known-text rendering for every geometry subtype.
//!
//! Numbers render in plain decimal (shortest round-trip form), matching
//! how the result encoder formats numeric tokens. Empty shapes render
//! the `EMPTY` keyword. An `Extension` wrapper renders as its inner
//! shape; a reader of the output cannot tell the wrapper existed.

use std::fmt::Write;

use sonde_core::geometry::{Coordinate, Geometry, Shape};

/// Render a geometry's shape as WKT.
///
/// # Examples
///
/// ```
/// use sonde_core::{CrsId, Geometry};
/// use sonde_geom::to_wkt;
///
/// let geometry = Geometry::point(CrsId::WGS84, 7.65, 52.9);
/// assert_eq!(to_wkt(&geometry), "POINT (7.65 52.9)");
/// ```
pub fn to_wkt(geometry: &Geometry) -> String {
    shape_to_wkt(&geometry.shape)
}

/// Render a bare shape as WKT.
pub fn shape_to_wkt(shape: &Shape) -> String {
    let mut out = String::new();
    write_shape(&mut out, shape);
    out
}

/// `" Z"` when the shape's leading vertex carries an elevation.
/// Mixed-dimension shapes take the modifier from that first vertex.
fn z_modifier(shape: &Shape) -> &'static str {
    match first_coordinate(shape) {
        Some(c) if c.z.is_some() => " Z",
        _ => "",
    }
}

fn first_coordinate(shape: &Shape) -> Option<Coordinate> {
    match shape {
        Shape::Point(c) => Some(*c),
        Shape::LineString(coords) | Shape::MultiPoint(coords) => coords.first().copied(),
        Shape::Polygon { exterior, .. } => exterior.first().copied(),
        Shape::MultiLineString(lines) => lines.first().and_then(|l| l.first()).copied(),
        Shape::MultiPolygon(polys) => polys.first().and_then(|(ext, _)| ext.first()).copied(),
        Shape::Collection(shapes) => shapes.first().and_then(first_coordinate),
        Shape::Extension(inner) => first_coordinate(inner),
    }
}

fn write_coordinate(out: &mut String, c: &Coordinate) {
    let _ = write!(out, "{} {}", c.x, c.y);
    if let Some(z) = c.z {
        let _ = write!(out, " {z}");
    }
}

fn write_coordinate_list(out: &mut String, coords: &[Coordinate]) {
    out.push('(');
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_coordinate(out, c);
    }
    out.push(')');
}

fn write_polygon_body(out: &mut String, exterior: &[Coordinate], interiors: &[Vec<Coordinate>]) {
    out.push('(');
    write_coordinate_list(out, exterior);
    for ring in interiors {
        out.push_str(", ");
        write_coordinate_list(out, ring);
    }
    out.push(')');
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Point(c) => {
            out.push_str("POINT");
            out.push_str(z_modifier(shape));
            out.push_str(" (");
            write_coordinate(out, c);
            out.push(')');
        }
        Shape::LineString(coords) => {
            out.push_str("LINESTRING");
            out.push_str(z_modifier(shape));
            if coords.is_empty() {
                out.push_str(" EMPTY");
            } else {
                out.push(' ');
                write_coordinate_list(out, coords);
            }
        }
        Shape::Polygon {
            exterior,
            interiors,
        } => {
            out.push_str("POLYGON");
            out.push_str(z_modifier(shape));
            if exterior.is_empty() {
                out.push_str(" EMPTY");
            } else {
                out.push(' ');
                write_polygon_body(out, exterior, interiors);
            }
        }
        Shape::MultiPoint(coords) => {
            out.push_str("MULTIPOINT");
            out.push_str(z_modifier(shape));
            if coords.is_empty() {
                out.push_str(" EMPTY");
            } else {
                out.push(' ');
                write_coordinate_list(out, coords);
            }
        }
        Shape::MultiLineString(lines) => {
            out.push_str("MULTILINESTRING");
            out.push_str(z_modifier(shape));
            if lines.is_empty() {
                out.push_str(" EMPTY");
            } else {
                out.push_str(" (");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_coordinate_list(out, line);
                }
                out.push(')');
            }
        }
        Shape::MultiPolygon(polys) => {
            out.push_str("MULTIPOLYGON");
            out.push_str(z_modifier(shape));
            if polys.is_empty() {
                out.push_str(" EMPTY");
            } else {
                out.push_str(" (");
                for (i, (exterior, interiors)) in polys.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_polygon_body(out, exterior, interiors);
                }
                out.push(')');
            }
        }
        Shape::Collection(shapes) => {
            if shapes.is_empty() {
                out.push_str("GEOMETRYCOLLECTION EMPTY");
            } else {
                out.push_str("GEOMETRYCOLLECTION (");
                for (i, sub) in shapes.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_shape(out, sub);
                }
                out.push(')');
            }
        }
        Shape::Extension(inner) => write_shape(out, inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_core::CrsId;

    fn ring() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(4.0, 0.0),
            Coordinate::new(4.0, 4.0),
            Coordinate::new(0.0, 0.0),
        ]
    }

    #[test]
    fn point_renders_plain_decimal() {
        let geometry = Geometry::point(CrsId::WGS84, 7.65, 52.9);
        assert_eq!(to_wkt(&geometry), "POINT (7.65 52.9)");
    }

    #[test]
    fn point_with_elevation_gets_z_modifier() {
        let geometry = Geometry::point_3d(CrsId::WGS84, 7.0, 52.0, 11.5);
        assert_eq!(to_wkt(&geometry), "POINT Z (7 52 11.5)");
    }

    #[test]
    fn line_string() {
        let shape = Shape::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 2.0)]);
        assert_eq!(shape_to_wkt(&shape), "LINESTRING (0 0, 1 2)");
        assert_eq!(shape_to_wkt(&Shape::LineString(vec![])), "LINESTRING EMPTY");
    }

    #[test]
    fn polygon_with_hole() {
        let hole = vec![
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 1.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(1.0, 1.0),
        ];
        let shape = Shape::Polygon {
            exterior: ring(),
            interiors: vec![hole],
        };
        assert_eq!(
            shape_to_wkt(&shape),
            "POLYGON ((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 2 2, 1 1))"
        );
    }

    #[test]
    fn multi_and_collection() {
        let shape = Shape::MultiPoint(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
        assert_eq!(shape_to_wkt(&shape), "MULTIPOINT (1 2, 3 4)");

        let collection = Shape::Collection(vec![
            Shape::Point(Coordinate::new(1.0, 2.0)),
            Shape::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]),
        ]);
        assert_eq!(
            shape_to_wkt(&collection),
            "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))"
        );
        assert_eq!(
            shape_to_wkt(&Shape::Collection(vec![])),
            "GEOMETRYCOLLECTION EMPTY"
        );
    }

    #[test]
    fn extension_renders_as_inner_shape() {
        let shape = Shape::Extension(Box::new(Shape::Point(Coordinate::new(1.0, 2.0))));
        assert_eq!(shape_to_wkt(&shape), "POINT (1 2)");
    }

    #[test]
    fn multi_polygon() {
        let shape = Shape::MultiPolygon(vec![(ring(), vec![]), (ring(), vec![])]);
        assert_eq!(
            shape_to_wkt(&shape),
            "MULTIPOLYGON (((0 0, 4 0, 4 4, 0 0)), ((0 0, 4 0, 4 4, 0 0)))"
        );
    }
}
